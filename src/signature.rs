#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::str::FromStr;

use peg::{error::ParseError, str::LineCol};

use crate::{parsers::parser, types::MethodDescriptor};

#[derive(thiserror::Error, Debug)]
/// Errors raised while parsing a method signature.
pub enum SignatureError {
    /// No `[modifier] returnType name(args)` shape occurs anywhere in the input.
    #[error(
        "`{signature}` is not a method signature of the form `[accessModifier] returnType \
         methodName(argumentType argumentName, ...)`"
    )]
    MalformedSignature {
        /// the rejected input
        signature: String,
        /// grammar error from the last attempted position
        #[source]
        source:    ParseError<LineCol>,
    },
}

/// Parses Java-like method declarations into [`MethodDescriptor`]s.
///
/// The declaration may appear anywhere in the input; the first occurrence is
/// used and surrounding text is ignored. Inside the parentheses every
/// `type name` pair becomes an [`crate::types::Argument`], and anything that
/// does not fit that shape (stray commas, lone words) is dropped silently.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignatureParser;

impl SignatureParser {
    /// Returns a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses `signature` into a [`MethodDescriptor`].
    ///
    /// * `signature`: text such as `private void log(String value)`
    pub fn parse(&self, signature: &str) -> Result<MethodDescriptor, SignatureError> {
        match parser::method_signature(signature) {
            Ok(descriptor) => {
                tracing::debug!(
                    "Parsed `{}` with {} argument(s)",
                    descriptor.method_name(),
                    descriptor.arguments().len()
                );
                Ok(descriptor)
            }
            Err(source) => {
                tracing::debug!("Rejected malformed signature {:?}: {}", signature, source);
                Err(SignatureError::MalformedSignature {
                    signature: signature.to_string(),
                    source,
                })
            }
        }
    }
}

/// Parses `signature` with a default [`SignatureParser`].
pub fn parse_signature(signature: &str) -> Result<MethodDescriptor, SignatureError> {
    SignatureParser.parse(signature)
}

impl FromStr for MethodDescriptor {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_signature(s)
    }
}

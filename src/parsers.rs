#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::types::{AccessModifier, Argument, MethodDescriptor};

peg::parser! {
    /// grammars for pulling method declarations out of Java-like source text.
    pub grammar parser() for str {
        /// matches a single ASCII word character
        rule word_char() = ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']

        /// matches a maximal run of word characters
        rule word() -> &'input str
            = $(word_char()+)

        /// matches one or more whitespace characters
        rule whitespace() = quiet!{[' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C']+}

        /// matches one of the visibility keywords
        rule access_modifier() -> AccessModifier
            = "public" { AccessModifier::Public }
            / "protected" { AccessModifier::Protected }
            / "private" { AccessModifier::Private }

        /// matches a `type name` pair
        rule argument() -> Argument
            = t:word() whitespace() n:word() { Argument::new(t, n) }

        /// collects every `type name` pair, skipping anything else one
        /// character at a time
        rule arguments() -> Vec<Argument>
            = a:(arg:argument() { Some(arg) } / [^ ')'] { None })*
            { a.into_iter().flatten().collect() }

        /// matches `returnType methodName(args)`
        rule declaration(modifier: Option<AccessModifier>) -> MethodDescriptor
            = r:word() whitespace() n:word() "(" a:arguments() ")"
            {
                MethodDescriptor::builder()
                    .access_modifier(modifier)
                    .return_type(r)
                    .method_name(n)
                    .arguments(a)
                    .build()
            }

        /// matches a declaration starting exactly here; a modifier that does
        /// not lead to a full declaration is retried as the return type
        rule signature() -> MethodDescriptor
            = m:access_modifier() whitespace() d:declaration(Some(m)) { d }
            / declaration(None)

        /// parses the first declaration found anywhere in the input
        pub rule method_signature() -> MethodDescriptor
            = (!signature() [_])* d:signature() [_]* { d }

        /// parses the contents of a parameter list, never failing
        pub rule argument_list() -> Vec<Argument>
            = a:(arg:argument() { Some(arg) } / [_] { None })*
            { a.into_iter().flatten().collect() }
    }
}

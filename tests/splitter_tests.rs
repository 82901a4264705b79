use sigsplit::{DelimiterSplitter, parsers::parser, split_by_delimiters};

#[test]
fn splits_on_every_delimiter() {
    assert_eq!(split_by_delimiters("a,b;c", [",", ";"]), vec!["a", "b", "c"]);
}

#[test]
fn consecutive_delimiters_do_not_produce_empty_tokens() {
    assert_eq!(split_by_delimiters("  a   b ", [" "]), vec!["a", "b"]);
    assert!(split_by_delimiters(",,;,", [",", ";"]).is_empty());
}

#[test]
fn no_delimiters_keeps_source_whole() {
    assert_eq!(split_by_delimiters("abc", std::iter::empty::<&str>()), vec!["abc"]);
    assert_eq!(DelimiterSplitter::default().split("a b,c"), vec!["a b,c"]);
    assert!(split_by_delimiters("", std::iter::empty::<&str>()).is_empty());
}

#[test]
fn empty_source_gives_no_tokens() {
    assert!(split_by_delimiters("", [","]).is_empty());
}

#[test]
fn multi_character_delimiters_split_on_each_character() {
    assert_eq!(split_by_delimiters("a--b-c", ["--"]), vec!["a", "b", "c"]);
    assert_eq!(split_by_delimiters("hello world", ["lo"]), vec!["he", " w", "r", "d"]);
}

#[test]
fn accepts_owned_delimiters() {
    let delimiters = vec![String::from("|"), String::from(" ")];
    let splitter = DelimiterSplitter::new(&delimiters);
    assert_eq!(splitter.split("α|β γ"), vec!["α", "β", "γ"]);
    assert_eq!(splitter, DelimiterSplitter::new(["| "]));
}

#[test]
fn preserves_source_order() {
    let splitter = DelimiterSplitter::new([";"]);
    assert_eq!(splitter.split("z;y;x;y"), vec!["z", "y", "x", "y"]);
}

#[test]
fn pre_tokenized_arguments_feed_the_argument_grammar() {
    let pieces = split_by_delimiters("int x, long y,", [","]);
    assert_eq!(pieces, vec!["int x", " long y"]);

    let parsed: Vec<_> = pieces
        .iter()
        .flat_map(|piece| parser::argument_list(piece).expect("argument list parses"))
        .map(|arg| format!("{}:{}", arg.type_name(), arg.name()))
        .collect();
    assert_eq!(parsed, vec!["int:x", "long:y"]);
}

use crate::parser::block_parser::{Block, BlockKind, BlockParser};

pub fn parse_blocks(input: &str) -> Vec<Block<'_>> {
    super::super::init_logger();
    BlockParser::new(input).parse()
}

pub fn assert_block_kinds(input: &str, expected: &[BlockKind]) {
    let blocks = parse_blocks(input);
    let actual: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

pub fn block_texts(input: &str) -> Vec<&str> {
    parse_blocks(input).iter().map(|b| b.text).collect()
}

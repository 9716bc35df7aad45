//! Fenced code block extraction from Markdown documents.
//!
//! Blocks are only collected; nothing here runs them.

use regex::Regex;

use crate::error::{TourError, TourResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Info string after the opening fence, `None` when empty.
    pub lang: Option<String>,
    pub code: String,
    /// 1-based line of the opening fence.
    pub line: usize,
}

pub struct BlockParser {
    block_start: Regex,
    block_end: Regex,
}

impl BlockParser {
    pub fn new() -> Self {
        Self {
            block_start: Regex::new(r"^```(?P<language>.*)$")
                .expect("fence open pattern compiles"),
            block_end: Regex::new(r"```").expect("fence close pattern compiles"),
        }
    }

    pub fn parse(&self, input: &str) -> TourResult<Vec<CodeBlock>> {
        let mut blocks = Vec::new();
        let mut lines = input.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let Some(captures) = self.block_start.captures(line) else {
                continue;
            };
            let lang = captures
                .name("language")
                .map(|m| m.as_str().trim())
                .filter(|lang| !lang.is_empty())
                .map(str::to_string);

            let mut code = Vec::new();
            let mut closed = false;
            for (_, body) in lines.by_ref() {
                if self.block_end.is_match(body) {
                    closed = true;
                    break;
                }
                code.push(body);
            }
            if !closed {
                return Err(TourError::UnterminatedBlock { line: index + 1 });
            }

            blocks.push(CodeBlock {
                lang,
                code: code.join("\n"),
                line: index + 1,
            });
        }

        log::info!("docs:parsed blocks={}", blocks.len());
        Ok(blocks)
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `input` and keeps only blocks tagged `lang`.
pub fn blocks_for_lang(input: &str, lang: &str) -> TourResult<Vec<CodeBlock>> {
    let blocks = BlockParser::new().parse(input)?;
    Ok(blocks
        .into_iter()
        .filter(|block| block.lang.as_deref() == Some(lang))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_text_outside_fences() {
        let parser = BlockParser::new();
        let blocks = parser.parse("just prose\nno code here\n").unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn empty_block_has_empty_code() {
        let parser = BlockParser::new();
        let blocks = parser.parse("```\n```\n").unwrap();
        assert_eq!(
            blocks,
            vec![CodeBlock {
                lang: None,
                code: String::new(),
                line: 1,
            }]
        );
    }
}

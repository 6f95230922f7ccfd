use comrak::{
    Arena, format_html,
    nodes::{AstNode, NodeHtmlBlock, NodeValue},
    options::Options,
    parse_document,
};
use syntect::{html::ClassStyle, parsing::SyntaxSet};

use crate::application::render::types::RenderError;

use super::highlight;

/// GitHub-flavoured options with hard line breaks. Raw HTML is passed through
/// untouched; the Markdown preview is not sanitised.
pub(crate) fn default_options() -> Options<'static> {
    let mut options = Options::default();
    configure_extensions(&mut options);
    options
}

fn configure_extensions(options: &mut Options<'static>) {
    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.tagfilter = false;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    let render = &mut options.render;
    render.hardbreaks = true;
    render.github_pre_lang = false;
    render.r#unsafe = true;
}

pub(crate) struct MarkdownRenderer<'a> {
    pub(crate) options: &'a Options<'static>,
    pub(crate) syntax_set: &'a SyntaxSet,
    pub(crate) class_style: &'a ClassStyle,
    pub(crate) highlight_fenced_code: bool,
}

impl MarkdownRenderer<'_> {
    pub(crate) fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, self.options);

        if self.highlight_fenced_code {
            self.rewrite_code_blocks(root)?;
        }

        let mut html = String::new();
        format_html(root, self.options, &mut html).map_err(|err| RenderError::Markdown {
            message: err.to_string(),
        })?;
        Ok(html)
    }

    /// Swap fenced code blocks for highlighted HTML. Blockquote nesting is
    /// unbounded in CommonMark, so the tree is walked without recursion.
    fn rewrite_code_blocks<'a>(&self, root: &'a AstNode<'a>) -> Result<(), RenderError> {
        let code_blocks: Vec<&'a AstNode<'a>> = root
            .descendants()
            .filter(|node| matches!(node.data.borrow().value, NodeValue::CodeBlock(_)))
            .collect();

        for node in code_blocks {
            let Some((info, literal)) = extract_code_block(node) else {
                continue;
            };
            let language = info.split_whitespace().next();
            let html =
                highlight::highlight_fence(language, &literal, self.syntax_set, self.class_style)?;
            node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: html,
            });
        }

        Ok(())
    }
}

fn extract_code_block(node: &AstNode<'_>) -> Option<(String, String)> {
    let data = node.data.borrow();
    if let NodeValue::CodeBlock(block) = &data.value {
        let info = block.info.trim().to_string();
        let literal = block.literal.clone();
        Some((info, literal))
    } else {
        None
    }
}

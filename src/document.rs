use crate::canvas::Surface;
use crate::info::Info;
use crate::render::{Cursor, Renderer};
use crate::units::Px;

/// One piece of page content, drawn in order from the top of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    Paragraph(String),
    Bullet(String),
    /// Empty vertical space
    Gap(Px),
}

/// A document is the ordered list of blocks that make up the page, plus the metadata written
/// into the PDF
#[derive(Default, Debug, Clone)]
pub struct Document {
    pub info: Info,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Sets information about the document written into the PDF
    pub fn set_info(&mut self, info: Info) -> &mut Self {
        self.info = info;
        self
    }

    pub fn title<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.blocks.push(Block::Title(text.into()));
        self
    }

    pub fn heading<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.blocks.push(Block::Heading(text.into()));
        self
    }

    pub fn paragraph<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    /// Add one bullet per item
    pub fn bullets<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks
            .extend(items.into_iter().map(|item| Block::Bullet(item.into())));
        self
    }

    pub fn gap(&mut self, by: Px) -> &mut Self {
        self.blocks.push(Block::Gap(by));
        self
    }

    /// Draw every block in order, advancing `cursor` past each of them
    pub fn draw<S: Surface + ?Sized>(&self, renderer: &mut Renderer<'_, S>, cursor: &mut Cursor) {
        for block in self.blocks.iter() {
            match block {
                Block::Title(text) => renderer.title(cursor, text),
                Block::Heading(text) => renderer.heading(cursor, text),
                Block::Paragraph(text) => renderer.paragraph(cursor, text),
                Block::Bullet(text) => renderer.bullet(cursor, text),
                Block::Gap(by) => renderer.gap(cursor, *by),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_block_order() {
        let mut doc = Document::new();
        doc.title("T")
            .heading("H")
            .paragraph("P")
            .gap(Px(14.0))
            .bullets(["a", "b"]);

        assert_eq!(
            doc.blocks,
            vec![
                Block::Title("T".into()),
                Block::Heading("H".into()),
                Block::Paragraph("P".into()),
                Block::Gap(Px(14.0)),
                Block::Bullet("a".into()),
                Block::Bullet("b".into()),
            ]
        );
    }
}

pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

/// Enum to represent the content parsers available for page files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// HTML parser
    Html,
    /// Plain text parser
    Text,
}

impl ParserType {
    /// Determines the parser type based on the file name
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".html") || lower.ends_with(".htm") || lower.ends_with(".xhtml") {
            ::log::trace!("Classifying as HTML: {}", name);
            ParserType::Html
        } else {
            // Anything else that made it past the file filter is compared as text
            ::log::trace!("Classifying as Text: {}", name);
            ParserType::Text
        }
    }
}

/// Which part of a document the visible text was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The first `<main>` element
    Main,
    /// The first `div.container`
    Container,
    /// The whole document
    Document,
}

/// Result of extracting the comparison text from one page
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Whitespace-normalized visible text
    pub content: String,
    /// Region the text came from
    pub region: Region,
}

impl Extraction {
    pub fn new(content: String, region: Region) -> Self {
        Self { content, region }
    }
}

/// Main parser that delegates to specific format parsers
pub struct Parser;

impl Parser {
    /// Parse content based on the parser type
    pub fn parse(content: &str, parser_type: ParserType) -> Extraction {
        match parser_type {
            ParserType::Html => html::extract_visible_text(content),
            ParserType::Text => Extraction::new(text::normalize_whitespace(content), Region::Document),
        }
    }

    /// Determine parser type from the file name and then parse content
    pub fn parse_file(content: &str, name: &str) -> Extraction {
        Self::parse(content, ParserType::from_file_name(name))
    }
}

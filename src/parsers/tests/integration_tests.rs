use crate::parsers::{Parser, ParserType, Region};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_parser_type() {
        // Test HTML
        let html_content = "<html><body><main><p>Hello, world!</p><a href=\"https://example.com\">Link</a></main></body></html>";
        let result = Parser::parse(html_content, ParserType::Html);
        assert_eq!(result.content, "Hello, world!Link");
        assert_eq!(result.region, Region::Main);

        // Test Text
        let text_content = "Line 1\nLine 2\nLine 3";
        let result = Parser::parse(text_content, ParserType::Text);
        assert_eq!(result.content, "Line 1 Line 2 Line 3");
        assert_eq!(result.region, Region::Document);
    }

    #[test]
    fn test_parse_file() {
        let html_content = "<main><p>Hello</p></main>";
        let result = Parser::parse_file(html_content, "page.html");
        assert_eq!(result.content, "Hello");

        // Markup in a text file is kept verbatim
        let result = Parser::parse_file(html_content, "notes.txt");
        assert_eq!(result.content, "<main><p>Hello</p></main>");
    }

    #[test]
    fn test_different_file_extensions() {
        let types = [
            ("file.txt", ParserType::Text),
            ("file.html", ParserType::Html),
            ("FILE.HTM", ParserType::Html),
            ("file.xhtml", ParserType::Html),
            ("file.md", ParserType::Text),
            ("طرق_ربح_المال_auto.html", ParserType::Html),
        ];

        for (name, expected_type) in types {
            assert_eq!(
                ParserType::from_file_name(name),
                expected_type,
                "File '{}' should be parsed as {:?}",
                name,
                expected_type
            );
        }
    }
}

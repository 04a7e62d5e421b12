//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{html, Parser};
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;
        self.extract_from_bytes(&bytes)
    }
}

impl DocxExtractor {
    /// A .docx file is an OOXML zip container; the document body lives in
    /// word/document.xml.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ResumeAnalyzerError::CorruptDocument(format!("Not a valid DOCX container: {}", e))
        })?;

        let mut document = archive.by_name("word/document.xml").map_err(|e| {
            ResumeAnalyzerError::CorruptDocument(format!("Missing word/document.xml: {}", e))
        })?;

        let mut xml = String::new();
        document.read_to_string(&mut xml).map_err(|e| {
            ResumeAnalyzerError::DocxExtraction(format!("Failed to read document body: {}", e))
        })?;

        Ok(self.xml_to_text(&xml))
    }

    fn xml_to_text(&self, xml: &str) -> String {
        // Paragraph ends, line breaks, and tabs become whitespace before
        // the remaining markup is stripped.
        let text = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", "\t");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let clean_text = clean_text
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(ResumeAnalyzerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)
            .await
            .map_err(ResumeAnalyzerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = self.html_to_text(&html_output);
        Ok(text)
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

//! Sitemap generation for a flat directory of pages.
//!
//! Output follows the sitemaps.org 0.9 protocol: one synthetic entry for the
//! site root, then one `url` per page in file name order.

use crate::config::SitemapConfig;
use crate::error::{Error, Result};
use crate::filter::FileFilter;
use crate::utils::{modified_date, today};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crawl hints assigned to a page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRank")]
pub struct PageRank {
    /// Relative priority between 0.0 and 1.0
    pub priority: f64,
    pub changefreq: ChangeFreq,
}

impl PageRank {
    /// Create a rank, clamping the priority into 0.0..=1.0 (NaN becomes 0.0)
    pub fn new(priority: f64, changefreq: ChangeFreq) -> Self {
        let priority = if priority.is_nan() {
            0.0
        } else {
            priority.clamp(0.0, 1.0)
        };
        Self {
            priority,
            changefreq,
        }
    }
}

/// Unchecked form of [`PageRank`] as it appears in configuration files
#[derive(Deserialize)]
struct RawPageRank {
    priority: f64,
    changefreq: ChangeFreq,
}

impl TryFrom<RawPageRank> for PageRank {
    type Error = String;

    fn try_from(raw: RawPageRank) -> std::result::Result<Self, Self::Error> {
        if !raw.priority.is_finite() || !(0.0..=1.0).contains(&raw.priority) {
            return Err(format!(
                "priority {} is outside the range 0.0 to 1.0",
                raw.priority
            ));
        }
        Ok(Self {
            priority: raw.priority,
            changefreq: raw.changefreq,
        })
    }
}

/// Assigns a rank to any file name containing `keyword` (case-insensitive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub rank: PageRank,
}

impl KeywordRule {
    pub fn new(keyword: &str, rank: PageRank) -> Self {
        Self {
            keyword: keyword.to_string(),
            rank,
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .to_lowercase()
            .contains(&self.keyword.to_lowercase())
    }
}

/// One `url` element of the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    pub priority: f64,
}

/// Outcome of one builder run
#[derive(Debug, Clone)]
pub struct SitemapSummary {
    /// Number of `url` entries written, including the root
    pub url_count: usize,
    pub output_path: PathBuf,
}

/// Builds `sitemap.xml` documents
pub struct SitemapBuilder {
    config: SitemapConfig,
}

impl SitemapBuilder {
    pub fn new(config: SitemapConfig) -> Self {
        Self { config }
    }

    /// Override the site root URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Override the output file name
    pub fn with_output_file(mut self, output_file: &str) -> Self {
        self.config.output_file = output_file.to_string();
        self
    }

    pub fn config(&self) -> &SitemapConfig {
        &self.config
    }

    /// Exact table entry, then first matching keyword rule, then the default
    pub fn classify(&self, file_name: &str) -> PageRank {
        if let Some(rank) = self.config.priorities.get(file_name) {
            return *rank;
        }
        self.config
            .keyword_rules
            .iter()
            .find(|rule| rule.matches(file_name))
            .map(|rule| rule.rank)
            .unwrap_or(self.config.default_rank)
    }

    fn base_url(&self) -> Result<Url> {
        let base = Url::parse(&self.config.base_url).map_err(|e| Error::InvalidUrl {
            url: self.config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                url: self.config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(base)
    }

    /// URL of `segment` under the base path; the segment is percent-encoded
    fn page_url(base: &Url, segment: &str) -> String {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url.to_string()
    }

    /// Root entry followed by one entry per page in `dir`
    pub fn collect_entries(&self, dir: &Path) -> Result<Vec<SitemapEntry>> {
        let base = self.base_url()?;
        let filter = FileFilter::new(self.config.filter.clone())?;
        let pages = filter.list_pages(dir)?;

        let mut entries = Vec::with_capacity(pages.len() + 1);
        entries.push(SitemapEntry {
            loc: Self::page_url(&base, ""),
            lastmod: today(),
            changefreq: ChangeFreq::Daily,
            priority: 1.0,
        });

        for path in &pages {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let rank = self.classify(name);
            ::log::debug!(
                "Adding {} (priority {:.1}, {})",
                name,
                rank.priority,
                rank.changefreq
            );
            entries.push(SitemapEntry {
                loc: Self::page_url(&base, name),
                lastmod: modified_date(path),
                changefreq: rank.changefreq,
                priority: rank.priority,
            });
        }

        ::log::info!("Collected {} pages for the sitemap", pages.len());
        Ok(entries)
    }

    /// Render entries as an indented sitemap document
    pub fn render(&self, entries: &[SitemapEntry]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_document(&mut writer, entries).map_err(Error::Render)?;

        let mut out = writer.into_inner();
        out.push(b'\n');
        String::from_utf8(out).map_err(|e| Error::InvalidSitemap(e.to_string()))
    }

    /// Collect, render and write the sitemap inside `dir`
    pub fn run(&self, dir: &Path) -> Result<SitemapSummary> {
        let entries = self.collect_entries(dir)?;
        let xml = self.render(&entries)?;

        let output_path = dir.join(&self.config.output_file);
        fs::write(&output_path, xml).map_err(|e| Error::io(&output_path, e))?;

        ::log::info!(
            "Wrote {} URLs to {}",
            entries.len(),
            output_path.display()
        );
        Ok(SitemapSummary {
            url_count: entries.len(),
            output_path,
        })
    }
}

impl Default for SitemapBuilder {
    fn default() -> Self {
        Self::new(SitemapConfig::default())
    }
}

fn write_document<W: Write>(w: &mut Writer<W>, entries: &[SitemapEntry]) -> std::io::Result<()> {
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    urlset.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    urlset.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    w.write_event(Event::Start(urlset))?;

    for entry in entries {
        w.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(w, "loc", &entry.loc)?;
        write_text_element(w, "lastmod", &entry.lastmod)?;
        write_text_element(w, "changefreq", entry.changefreq.as_str())?;
        write_text_element(w, "priority", &format!("{:.1}", entry.priority))?;
        w.write_event(Event::End(BytesEnd::new("url")))?;
    }

    w.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(())
}

fn write_text_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> std::io::Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Count the `url` entries of a sitemap document.
///
/// Fails when the XML is malformed or the root element is not a `urlset`
/// in the sitemaps.org namespace.
pub fn count_urls(xml: &str) -> Result<usize> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut urls = 0usize;
    loop {
        let (element, is_empty) = match reader.read_event()? {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        if depth == 0 {
            if seen_root {
                return Err(Error::InvalidSitemap("more than one root element".to_string()));
            }
            check_root(&element)?;
            seen_root = true;
        } else if depth == 1 && element.local_name().as_ref() == b"url" {
            urls += 1;
        }

        if !is_empty {
            depth += 1;
        }
    }

    if !seen_root {
        return Err(Error::InvalidSitemap("missing <urlset> root".to_string()));
    }
    if depth != 0 {
        return Err(Error::InvalidSitemap("unclosed elements".to_string()));
    }
    Ok(urls)
}

fn check_root(root: &BytesStart<'_>) -> Result<()> {
    if root.local_name().as_ref() != b"urlset" {
        return Err(Error::InvalidSitemap(format!(
            "unexpected root element <{}>",
            String::from_utf8_lossy(root.name().as_ref())
        )));
    }

    let namespace = root
        .try_get_attribute("xmlns")
        .map_err(quick_xml::Error::from)?;
    match namespace {
        Some(attr) if attr.value.as_ref() == SITEMAP_NAMESPACE.as_bytes() => Ok(()),
        Some(attr) => Err(Error::InvalidSitemap(format!(
            "unexpected namespace {}",
            String::from_utf8_lossy(attr.value.as_ref())
        ))),
        None => Err(Error::InvalidSitemap(format!(
            "<urlset> is not in the {} namespace",
            SITEMAP_NAMESPACE
        ))),
    }
}

/// Re-read a written sitemap and count its `url` entries
pub fn validate(path: &Path) -> Result<usize> {
    let xml = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    count_urls(&xml)
}

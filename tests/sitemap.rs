use sitepages::sitemap::{self, ChangeFreq};
use sitepages::utils::today;
use sitepages::{Error, SitemapBuilder};
use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "<html><body>page</body></html>").unwrap();
}

#[test]
fn index_and_about_give_two_entries() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "index.html");
    touch(dir.path(), "about.html");

    let builder = SitemapBuilder::default().with_base_url("https://example.com");
    let entries = builder.collect_entries(dir.path()).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].loc, "https://example.com/");
    assert_eq!(entries[0].priority, 1.0);
    assert_eq!(entries[0].changefreq, ChangeFreq::Daily);
    assert_eq!(entries[1].loc, "https://example.com/about.html");
    assert_eq!(entries[1].priority, 0.9);
    assert_eq!(entries[1].changefreq, ChangeFreq::Monthly);

    let summary = builder.run(dir.path()).unwrap();
    assert_eq!(summary.url_count, 2);
    assert_eq!(summary.output_path, dir.path().join("sitemap.xml"));
    assert_eq!(sitemap::validate(&summary.output_path).unwrap(), 2);

    let xml = fs::read_to_string(&summary.output_path).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<loc>https://example.com/</loc>"));
    assert!(xml.contains("<loc>https://example.com/about.html</loc>"));
    assert!(!xml.contains("index.html"));
}

#[test]
fn error_page_and_other_files_are_excluded() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "404.html");
    touch(dir.path(), "faq.html");
    fs::write(dir.path().join("style.css"), "body {}").unwrap();
    fs::create_dir(dir.path().join("drafts")).unwrap();
    touch(&dir.path().join("drafts"), "draft.html");

    let entries = SitemapBuilder::default()
        .collect_entries(dir.path())
        .unwrap();
    let locs: Vec<_> = entries.iter().map(|e| e.loc.as_str()).collect();
    assert_eq!(
        locs,
        vec![
            "https://zezooo342.github.io/",
            "https://zezooo342.github.io/faq.html"
        ]
    );
}

#[test]
fn pages_are_sorted_and_classified() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["zakat-guide.html", "crypto-security.html", "recipes.html", "bitcoin-crypto.html"] {
        touch(dir.path(), name);
    }

    let entries = SitemapBuilder::default()
        .with_base_url("https://example.com/")
        .collect_entries(dir.path())
        .unwrap();
    let ranked: Vec<_> = entries[1..]
        .iter()
        .map(|e| (e.loc.trim_start_matches("https://example.com/"), e.priority, e.changefreq))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("bitcoin-crypto.html", 0.8, ChangeFreq::Weekly),
            ("crypto-security.html", 0.7, ChangeFreq::Weekly),
            ("recipes.html", 0.6, ChangeFreq::Monthly),
            ("zakat-guide.html", 0.7, ChangeFreq::Weekly),
        ]
    );
}

#[test]
fn arabic_file_names_are_percent_encoded() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "طرق_ربح_المال_auto.html");

    let builder = SitemapBuilder::default().with_base_url("https://example.com");
    let summary = builder.run(dir.path()).unwrap();
    let xml = fs::read_to_string(&summary.output_path).unwrap();

    assert!(xml.contains(
        "<loc>https://example.com/%D8%B7%D8%B1%D9%82_%D8%B1%D8%A8%D8%AD_%D8%A7%D9%84%D9%85%D8%A7%D9%84_auto.html</loc>"
    ));
    assert!(xml.contains("<priority>0.7</priority>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
}

#[test]
fn lastmod_comes_from_file_time() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "about.html");

    let entries = SitemapBuilder::default()
        .collect_entries(dir.path())
        .unwrap();
    // Freshly written file and the root entry both carry today's date
    assert!(entries.iter().all(|e| e.lastmod == today()));
}

#[test]
fn custom_output_file() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "about.html");

    let summary = SitemapBuilder::default()
        .with_output_file("site-map.xml")
        .run(dir.path())
        .unwrap();

    assert_eq!(summary.output_path, dir.path().join("site-map.xml"));
    assert!(!dir.path().join("sitemap.xml").exists());
    assert_eq!(sitemap::validate(&summary.output_path).unwrap(), 2);
}

#[test]
fn validate_rejects_non_sitemap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.xml");
    fs::write(&path, "<?xml version=\"1.0\"?><rss version=\"2.0\"></rss>").unwrap();

    assert!(matches!(
        sitemap::validate(&path),
        Err(Error::InvalidSitemap(_))
    ));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = SitemapBuilder::default().run(&dir.path().join("nope"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

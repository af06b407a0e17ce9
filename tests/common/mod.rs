#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the article-guard binary.
#[macro_export]
macro_rules! article_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("article-guard"))
    };
}

/// Builds article HTML fixtures in a temp directory.
///
/// `ArticleBuilder::valid()` produces a document that passes every check:
/// three correctly sized logo references, external links with
/// `target="_blank"`, consistent date and read time, and a resolvable TOC.
/// Mutators knock out individual properties.
pub struct ArticleBuilder {
    logo_blocks: Vec<(String, String)>,
    anchors: Vec<String>,
    meta_dates: Vec<String>,
    read_times: Vec<String>,
    toc: Option<Vec<String>>,
    section_ids: Vec<String>,
}

impl ArticleBuilder {
    pub fn empty() -> Self {
        Self {
            logo_blocks: Vec::new(),
            anchors: Vec::new(),
            meta_dates: Vec::new(),
            read_times: Vec::new(),
            toc: None,
            section_ids: Vec::new(),
        }
    }

    pub fn valid() -> Self {
        let mut builder = Self::empty();
        for _ in 0..3 {
            builder = builder.with_logo("1200", "630");
        }
        builder
            .with_external_link("https://example.com/docs", "the docs", true)
            .with_meta_date("2024-03-10")
            .with_meta_date("2024-03-10")
            .with_read_time("6 min read")
            .with_toc(&["intro", "setup"])
            .with_section("intro")
            .with_section("setup")
    }

    pub fn with_logo(mut self, width: &str, height: &str) -> Self {
        self.logo_blocks.push((width.to_string(), height.to_string()));
        self
    }

    pub fn with_external_link(mut self, url: &str, text: &str, new_tab: bool) -> Self {
        let target = if new_tab { " target=\"_blank\"" } else { "" };
        self.anchors
            .push(format!("<a href=\"{url}\"{target}>{text}</a>"));
        self
    }

    pub fn with_meta_date(mut self, date: &str) -> Self {
        self.meta_dates.push(date.to_string());
        self
    }

    pub fn with_read_time(mut self, read_time: &str) -> Self {
        self.read_times.push(read_time.to_string());
        self
    }

    pub fn with_toc(mut self, targets: &[&str]) -> Self {
        self.toc = Some(targets.iter().map(ToString::to_string).collect());
        self
    }

    pub fn with_section(mut self, id: &str) -> Self {
        self.section_ids.push(id.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut html = String::from("<html>\n<head>\n");
        for (width, height) in &self.logo_blocks {
            html.push_str(&format!(
                "<meta property=\"og:image\" content=\"/assets/brand-logo.png\">\n\
                 <meta property=\"og:image:width\" content=\"{width}\">\n\
                 <meta property=\"og:image:height\" content=\"{height}\">\n"
            ));
        }
        for date in &self.meta_dates {
            html.push_str(&format!("<meta content=\"{date}\" name=\"date\">\n"));
        }
        html.push_str("</head>\n<body>\n");
        for read_time in &self.read_times {
            html.push_str(&format!("<span>{read_time}</span>\n"));
        }
        if let Some(targets) = &self.toc {
            html.push_str("<div class=\"table-of-contents\">\n");
            for target in targets {
                html.push_str(&format!("<a href=\"#{target}\">{target} section</a>\n"));
            }
            html.push_str("</div>\n");
        }
        for id in &self.section_ids {
            html.push_str(&format!("<h2 id=\"{id}\">{id}</h2>\n"));
        }
        for anchor in &self.anchors {
            html.push_str(&format!("<p>{anchor}</p>\n"));
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Writes the article into `dir` and returns its path.
    pub fn write_to(&self, dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, self.build()).expect("Failed to write article fixture");
        path
    }
}

// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page HTML report wrapping the demo's SVG sections.

use crate::svg::escape_xml;

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) caption: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let title = escape_xml(title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:24px}\
         .grid{display:flex;flex-wrap:wrap;gap:16px}\
         figure{margin:0}figcaption{font-size:12px;color:#555}</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n<div class=\"grid\">\n"));
    for section in sections {
        out.push_str("<figure>\n");
        out.push_str(&section.svg);
        out.push_str(&format!(
            "<figcaption><strong>{}</strong><br>{}</figcaption>\n",
            escape_xml(&section.title),
            escape_xml(&section.caption)
        ));
        out.push_str("</figure>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_embeds_sections_in_order() {
        let sections = [
            HtmlSection {
                title: "first".into(),
                caption: "a < b".into(),
                svg: "<svg id=\"1\"/>".into(),
            },
            HtmlSection {
                title: "second".into(),
                caption: String::new(),
                svg: "<svg id=\"2\"/>".into(),
            },
        ];
        let html = render_report("Report", &sections);
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("a &lt; b"));
        let first = html.find("id=\"1\"").unwrap();
        let second = html.find("id=\"2\"").unwrap();
        assert!(first < second);
    }
}

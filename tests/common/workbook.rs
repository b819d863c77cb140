//! Workbook inspection helpers
//!
//! Pulls rows of inline-string cells back out of an exported `.xlsx`, enough
//! to compare exported content with what was recorded.

use std::io::{Cursor, Read};

/// Read a named part out of the workbook archive.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive");
    let mut entry = archive.by_name(name).expect("part present");
    let mut out = String::new();
    entry.read_to_string(&mut out).expect("utf-8 part");
    out
}

/// Every row of the first worksheet as (column letter, text) cells.
pub fn sheet_rows(bytes: &[u8]) -> Vec<Vec<(String, String)>> {
    let sheet = read_part(bytes, "xl/worksheets/sheet1.xml");
    let mut rows = Vec::new();

    for row in sheet.split("<row ").skip(1) {
        let row = row.split("</row>").next().unwrap_or_default();
        let mut cells = Vec::new();
        for cell in row.split("<c r=\"").skip(1) {
            let reference: String = cell.chars().take_while(|c| *c != '"').collect();
            let column: String = reference.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
            let text = cell
                .split("<t xml:space=\"preserve\">")
                .nth(1)
                .and_then(|t| t.split("</t>").next())
                .unwrap_or_default()
                .to_string();
            cells.push((column, unescape(&text)));
        }
        rows.push(cells);
    }

    rows
}

/// Value of `column` in `row`, or "" for an omitted blank cell.
pub fn cell<'a>(row: &'a [(String, String)], column: &str) -> &'a str {
    row.iter()
        .find(|(c, _)| c == column)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

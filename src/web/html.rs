//! Server-side rendering of the tracker's pages.

use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::config::Catalog;
use crate::core::services::entry_service::fields;
use crate::core::services::ReviewService;
use crate::data::models::INPUT_DATE_FORMAT;
use crate::data::SampleRecord;
use crate::util::markup::escape;

const TITLE: &str = "Laboratory Sample Tracking System";

/// Everything the index page shows.
pub struct IndexView<'a> {
    pub catalog: &'a Catalog,
    pub records: &'a [SampleRecord],
    /// Tracking number to announce as just added
    pub added: Option<&'a str>,
    pub today: NaiveDate,
}

pub fn render_index(view: &IndexView<'_>) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", TITLE));

    if let Some(added) = view.added {
        if view.records.iter().any(|r| r.tracking_number() == added) {
            body.push_str(&format!(
                "<p class=\"banner success\" role=\"status\">Sample added with Tracking Number: <strong>{}</strong></p>\n",
                escape(added)
            ));
        }
    }

    body.push_str(&entry_form(view.catalog, view.today));

    if !view.records.is_empty() {
        body.push_str(&records_table(view.records));
        body.push_str(&review_panel(view.records, view.today));
    }

    page(TITLE, &body)
}

pub fn render_error(status: StatusCode, details: Option<&str>) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut body = format!("<h1>{} {}</h1>\n", status.as_u16(), escape(reason));
    if let Some(details) = details {
        body.push_str(&format!("<p class=\"banner error\">{}</p>\n", escape(details)));
    }
    body.push_str("<p><a href=\"/\">Back to the tracker</a></p>\n");
    page(reason, &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{}</title>\n",
            "<link rel=\"stylesheet\" href=\"/assets/style.css\">\n",
            "</head>\n<body>\n<main>\n{}</main>\n</body>\n</html>\n"
        ),
        escape(title),
        body
    )
}

fn input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

fn entry_form(catalog: &Catalog, today: NaiveDate) -> String {
    let mut html = String::from("<section class=\"entry\">\n<h2>Enter New Sample</h2>\n");
    html.push_str("<form method=\"post\" action=\"/samples\">\n");

    html.push_str(&format!(
        "<label>Date Received <input type=\"date\" name=\"{}\" value=\"{}\" required></label>\n",
        fields::DATE_RECEIVED,
        input_date(today)
    ));
    html.push_str(&format!(
        "<label>Client Details <input type=\"text\" name=\"{}\"></label>\n",
        fields::CLIENT_DETAILS
    ));

    html.push_str("<fieldset class=\"sample-types\">\n<legend>Sample Types</legend>\n");
    for name in &catalog.sample_types {
        html.push_str(&format!(
            "<label>{} <input type=\"number\" name=\"{}{}\" min=\"0\" step=\"1\" value=\"0\"></label>\n",
            escape(name),
            fields::AMOUNT_PREFIX,
            escape(name)
        ));
    }
    html.push_str("</fieldset>\n");

    html.push_str("<fieldset class=\"labs\">\n<legend>Designated Lab(s)</legend>\n");
    for lab in &catalog.labs {
        html.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"> {}</label>\n",
            fields::LAB,
            escape(lab),
            escape(lab)
        ));
    }
    html.push_str("</fieldset>\n");

    html.push_str("<fieldset class=\"query\">\n<legend>Is there a query?</legend>\n");
    html.push_str(&format!(
        "<label><input type=\"radio\" name=\"{0}\" value=\"No\" checked> No</label>\n\
         <label><input type=\"radio\" name=\"{0}\" value=\"Yes\"> Yes</label>\n",
        fields::QUERY
    ));
    html.push_str(&format!(
        "<div class=\"query-fields\">\n\
         <label>Query Details <textarea name=\"{}\" rows=\"3\"></textarea></label>\n\
         <label>Date Resolved <input type=\"date\" name=\"{}\"></label>\n\
         </div>\n",
        fields::QUERY_DETAILS,
        fields::QUERY_RESOLVED
    ));
    html.push_str("</fieldset>\n");

    html.push_str("<button type=\"submit\">Add Sample</button>\n</form>\n</section>\n");
    html
}

fn records_table(records: &[SampleRecord]) -> String {
    let mut html = String::from("<section class=\"records\">\n<h2>Tracked Samples</h2>\n");
    html.push_str("<p><a class=\"button\" href=\"/export\" download>Export to Excel</a></p>\n");
    html.push_str("<div class=\"table-scroll\">\n<table>\n<thead><tr>");
    for column in SampleRecord::COLUMNS {
        html.push_str(&format!("<th scope=\"col\">{}</th>", escape(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for record in records {
        html.push_str("<tr>");
        for cell in record.cells() {
            html.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</div>\n</section>\n");
    html
}

fn review_panel(records: &[SampleRecord], today: NaiveDate) -> String {
    let mut html = String::from("<section class=\"review\">\n<h2>Review Samples</h2>\n");

    for record in records {
        let tracking_number = escape(record.tracking_number().as_str());
        let collected = ReviewService::collected_date_or_today(record, today);

        html.push_str(&format!(
            "<details id=\"{0}\">\n<summary>{0} ({1})</summary>\n",
            tracking_number,
            escape(record.client_details())
        ));
        html.push_str(&format!(
            "<form method=\"post\" action=\"/samples/{}\">\n",
            tracking_number
        ));
        // Fields submit on change, so there is no separate save step.
        html.push_str(&format!(
            "<label>Analyst ID <input type=\"text\" name=\"analyst_id\" value=\"{}\" onchange=\"this.form.submit()\"></label>\n",
            escape(record.analyst_id())
        ));
        html.push_str(&format!(
            "<label>Date Collected <input type=\"date\" name=\"date_collected\" value=\"{}\" onchange=\"this.form.submit()\"></label>\n",
            input_date(collected)
        ));
        html.push_str("<noscript><button type=\"submit\">Save</button></noscript>\n");
        html.push_str("</form>\n</details>\n");
    }

    html.push_str("</section>\n");
    html
}

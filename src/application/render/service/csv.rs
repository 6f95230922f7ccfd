use std::fmt::Write;

use super::escape::escape_html;

pub(crate) const EMPTY_CSV_PLACEHOLDER: &str = "<div class=\"empty-csv\">No CSV data</div>";

/// Build a table from comma-separated lines. Delimiters are split literally;
/// quoted fields get no special treatment.
pub(crate) fn render_table(text: &str) -> String {
    let mut rows = text.split('\n').filter(|line| !line.trim().is_empty()).peekable();
    if rows.peek().is_none() {
        return EMPTY_CSV_PLACEHOLDER.to_string();
    }

    let mut html = String::from("<table class=\"csv-table\">");
    for (index, line) in rows.enumerate() {
        let cell_class = if index == 0 { "header-cell" } else { "data-cell" };
        html.push_str("<tr>");
        for cell in line.split(',') {
            // Writing into a String cannot fail.
            let _ = write!(
                html,
                "<td class=\"{cell_class}\">{}</td>",
                escape_html(cell.trim())
            );
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_is_header() {
        assert_eq!(
            render_table("a,b\n1,2"),
            concat!(
                "<table class=\"csv-table\">",
                "<tr><td class=\"header-cell\">a</td><td class=\"header-cell\">b</td></tr>",
                "<tr><td class=\"data-cell\">1</td><td class=\"data-cell\">2</td></tr>",
                "</table>"
            )
        );
    }

    #[test]
    fn blank_lines_and_carriage_returns_are_ignored() {
        let html = render_table("name, age\r\n\r\n  \nAda , 36\r\n");
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains("<td class=\"header-cell\">age</td>"));
        assert!(html.contains("<td class=\"data-cell\">Ada</td>"));
    }

    #[test]
    fn cells_are_escaped() {
        let html = render_table("<b>,\"q\"");
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&quot;q&quot;"));
    }

    #[test]
    fn quoted_commas_are_split_literally() {
        let html = render_table("\"a,b\",c");
        assert_eq!(html.matches("<td").count(), 3);
    }

    #[test]
    fn whitespace_only_input_is_placeholder() {
        assert_eq!(render_table(" \n\t\n"), EMPTY_CSV_PLACEHOLDER);
        assert_eq!(render_table(""), EMPTY_CSV_PLACEHOLDER);
    }

    #[test]
    fn ragged_rows_keep_their_own_width() {
        let html = render_table("a,b,c\n1");
        assert!(html.ends_with("<tr><td class=\"data-cell\">1</td></tr></table>"));
    }
}

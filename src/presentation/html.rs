// HTML rendering of resolved tooltips
use crate::domain::tooltip::{NO_DATASET, Tooltip};
use htmlescape::encode_minimal;

/// Markup for a point tooltip, as inserted under the chart.
pub fn render_point_tooltip(tooltip: &Tooltip) -> String {
    match tooltip {
        Tooltip::NoDataset => format!(r#"<span class="mfigure">{NO_DATASET}</span>"#),
        Tooltip::Figures(lines) => {
            let mut html = String::from(r#"<div class="mouse-figures">"#);
            for line in lines {
                html.push_str(&format!(
                    r#"<span class="mfigure">{} <small>{}</small></span><br>"#,
                    encode_minimal(&line.value),
                    encode_minimal(&line.label)
                ));
            }
            html.push_str("</div>");
            html
        }
    }
}

/// Escape a one-line axis or pie tooltip.
pub fn render_text(text: &str) -> String {
    encode_minimal(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tooltip::FigureLine;

    #[test]
    fn test_render_no_dataset() {
        assert_eq!(
            render_point_tooltip(&Tooltip::NoDataset),
            r#"<span class="mfigure">NO DATASET</span>"#
        );
    }

    #[test]
    fn test_render_figures() {
        let tooltip = Tooltip::Figures(vec![
            FigureLine::new("1.50 K".to_string(), "Hits".to_string()),
            FigureLine::new("2.00 MiB".to_string(), "Bytes".to_string()),
        ]);
        assert_eq!(
            render_point_tooltip(&tooltip),
            concat!(
                r#"<div class="mouse-figures">"#,
                r#"<span class="mfigure">1.50 K <small>Hits</small></span><br>"#,
                r#"<span class="mfigure">2.00 MiB <small>Bytes</small></span><br>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_render_escapes_labels() {
        let tooltip = Tooltip::Figures(vec![FigureLine::new(
            "3".to_string(),
            "<script>&".to_string(),
        )]);
        assert_eq!(
            render_point_tooltip(&tooltip),
            r#"<div class="mouse-figures"><span class="mfigure">3 <small>&lt;script&gt;&amp;</small></span><br></div>"#
        );
        assert_eq!(render_text("Jan, A&B: 3"), "Jan, A&amp;B: 3");
    }

    #[test]
    fn test_render_empty_figures() {
        assert_eq!(
            render_point_tooltip(&Tooltip::Figures(Vec::new())),
            r#"<div class="mouse-figures"></div>"#
        );
    }
}

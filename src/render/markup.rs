use crate::core::ChartOptions;

/// Whether the box at `index` starts a new row.
///
/// A row length of zero never breaks.
#[must_use]
pub fn is_row_break(index: usize, row_length: u32) -> bool {
    row_length != 0 && index % row_length as usize == 0
}

/// Builds the chart container markup for `item_count` boxes.
#[must_use]
pub fn chart_markup(options: &ChartOptions, item_count: usize) -> String {
    let id = options.dom_id.as_str();
    let mut html = String::with_capacity(96 + item_count * (36 + 2 * id.len()));

    html.push_str("<div id=\"");
    html.push_str(id);
    html.push_str("\">\n<h3 class=\"chartTitle\">");
    html.push_str(&options.title);
    if options.number_in_title {
        html.push_str(":&nbsp;<span>");
        html.push_str(&options.num_items.to_string());
        html.push_str("</span>");
    }
    html.push_str("</h3>\n");

    for index in 0..item_count {
        html.push_str("<a class=\"box\" id=\"");
        html.push_str(id);
        html.push('"');
        if is_row_break(index, options.row_length) {
            html.push_str(" style=\"clear:both;\"");
        }
        html.push_str("></a>\n");
    }

    html.push_str("<div class=\"clear\"></div></div>");
    html
}

/// Builds the embedded stylesheet scoped to the chart's container id.
#[must_use]
pub fn chart_stylesheet(options: &ChartOptions) -> String {
    let id = &options.dom_id;
    let margin = options.margin;
    let size = options.dimensions;
    format!(
        "\n\n<style type=\"text/css\">\n\
         \x20  .clear {{ clear: both; }}\n\
         \x20  .box#{id} {{\n\
         \x20      float: left;\n\
         \x20      margin-right: {margin}px;\n\
         \x20      margin-bottom: {margin}px;\n\
         \x20      height: {size}px;\n\
         \x20      width: {size}px;\n\
         \x20      background-color: {color};\n\
         \x20  }}\n\
         \x20  .box#{id}:hover {{\n\
         \x20      background-color: {hover};\n\
         \x20  }}\n\
         </style>\n",
        color = options.color,
        hover = options.hover_color,
    )
}

#[cfg(test)]
mod tests {
    use super::{chart_markup, chart_stylesheet, is_row_break};
    use crate::core::ChartOptions;

    #[test]
    fn row_breaks_fall_on_multiples_of_row_length() {
        let breaks: Vec<usize> = (0..36).filter(|i| is_row_break(*i, 10)).collect();
        assert_eq!(breaks, vec![0, 10, 20, 30]);
        assert!((0..36).all(|i| !is_row_break(i, 0)));
    }

    #[test]
    fn markup_layout_for_small_chart() {
        let options = ChartOptions::default()
            .with_title("Seats")
            .with_dom_id("c1")
            .with_row_length(2)
            .with_num_items(3);
        assert_eq!(
            chart_markup(&options, 3),
            "<div id=\"c1\">\n\
             <h3 class=\"chartTitle\">Seats</h3>\n\
             <a class=\"box\" id=\"c1\" style=\"clear:both;\"></a>\n\
             <a class=\"box\" id=\"c1\"></a>\n\
             <a class=\"box\" id=\"c1\" style=\"clear:both;\"></a>\n\
             <div class=\"clear\"></div></div>"
        );
    }

    #[test]
    fn title_count_is_appended_when_enabled() {
        let options = ChartOptions::default()
            .with_title("Test")
            .with_number_in_title(true);
        let html = chart_markup(&options, 0);
        assert!(html.contains("<h3 class=\"chartTitle\">Test:&nbsp;<span>36</span></h3>"));
    }

    #[test]
    fn stylesheet_uses_sizes_and_colors() {
        let options = ChartOptions::default()
            .with_color("#336699")
            .with_hover_color("#998877")
            .with_margin(2)
            .with_dimensions(15);
        let css = chart_stylesheet(&options);
        assert!(css.starts_with("\n\n<style type=\"text/css\">\n   .clear { clear: both; }\n"));
        assert!(css.contains("   .box#box_id {\n       float: left;\n"));
        assert!(css.contains("       margin-right: 2px;\n       margin-bottom: 2px;\n"));
        assert!(css.contains("       height: 15px;\n       width: 15px;\n"));
        assert!(css.contains("       background-color: #336699;\n"));
        assert!(css.contains("   .box#box_id:hover {\n       background-color: #998877;\n   }\n"));
        assert!(css.ends_with("</style>\n"));
    }
}

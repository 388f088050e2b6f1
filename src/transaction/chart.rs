//! Pie chart of expenses grouped by category.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! initialised by a script that is rendered next to its container, so that
//! the chart is redrawn whenever htmx swaps in a new ledger fragment.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Color, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::transaction::ledger::CategoryTotal;

/// The HTML element ID of the expense chart container.
pub const EXPENSE_CHART_ID: &str = "expense-chart";

/// The URL of the ECharts script the chart needs.
pub const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// One colour per category with hues spread evenly around the colour wheel.
pub fn category_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|index| {
            let hue = (index as f64 * 360.0) / count as f64;
            format!("hsl({hue}, 70%, 60%)")
        })
        .collect()
}

/// Build the expense breakdown pie chart.
pub fn expense_chart(totals: &[CategoryTotal]) -> Chart {
    let colors = category_colors(totals.len())
        .iter()
        .map(|color| Color::from(color.as_str()))
        .collect();

    let data = totals
        .iter()
        .map(|total| (total.total, total.category.as_str()))
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text("Expense Breakdown").left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top(30))
        .color(colors)
        .series(Pie::new().name("Expenses").radius("60%").data(data))
}

/// Renders the chart container and the script that draws the chart into it.
///
/// Any chart instance already bound to the container is disposed before the
/// new one is drawn. If there are no expenses, a placeholder is rendered
/// instead.
pub fn expense_chart_view(totals: &[CategoryTotal]) -> Markup {
    if totals.is_empty() {
        return html!(
            div id=(EXPENSE_CHART_ID) class="w-full text-center text-gray-500 dark:text-gray-400"
            {
                p { "Expenses will show up here once you add some." }
            }
        );
    }

    let options = expense_chart(totals).to_string();
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{EXPENSE_CHART_ID}");
            if (!chartDom || typeof echarts === "undefined") {{
                return;
            }}

            const existingChart = echarts.getInstanceByDom(chartDom);
            if (existingChart) {{
                existingChart.dispose();
            }}

            const chart = echarts.init(chartDom);
            chart.setOption({options});
            window.onresize = () => chart.resize();
        }})();"#
    );

    html!(
        div
            id=(EXPENSE_CHART_ID)
            class="w-full min-h-[380px] rounded dark:bg-gray-100"
        {}

        script { (PreEscaped(script)) }
    )
}

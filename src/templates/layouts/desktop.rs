use crate::domain::{FilterState, Page};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background-color: #f5f5f5; color: #2c3e50; }
header { display: flex; align-items: center; gap: 2rem; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header nav a { margin-right: 1rem; text-decoration: none; color: #524ed2; }
header nav a.active { font-weight: bold; border-bottom: 2px solid #524ed2; }
.shell { display: flex; align-items: flex-start; }
.sidebar { width: 280px; padding: 1rem 1.5rem; background: #fff; min-height: 100vh; box-sizing: border-box; }
.sidebar label { display: block; margin-top: 1rem; font-weight: 600; }
.sidebar select, .sidebar input[type=range] { width: 100%; }
.sidebar button { margin-top: 1rem; padding: 6px 14px; }
.downloads { margin-top: 2rem; display: flex; flex-direction: column; gap: 0.5rem; }
main { flex: 1; padding: 1.5rem 2rem; min-width: 0; }
.metrics { display: flex; gap: 2rem; margin: 1rem 0; }
.metric-label { font-size: 0.9rem; color: #7f8c8d; }
.metric-value { font-size: 2rem; font-weight: 600; }
.table-wrap { max-height: 420px; overflow: auto; background: #fff; border: 1px solid #e5e7eb; }
table.listings { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
table.listings th, table.listings td { padding: 6px 8px; border-bottom: 1px solid #f3f4f6; text-align: left; }
table.listings td.num { text-align: right; }
.chart { background: #fff; border: 1px solid #e5e7eb; margin: 1rem 0; }
.chart svg { width: 100%; height: auto; }
"#;

pub fn desktop_layout(title: &str, state: &FilterState, sidebar: Markup, content: Markup) -> Markup {
    let home_href = format!("/?{}", state.with_page(Page::Home).to_query());
    let about_href = format!("/?{}", state.with_page(Page::About).to_query());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="icon icon-tabler icon-tabler-home"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "🏠 Navigation" }
                    nav {
                        a href=(home_href) class=[(state.page == Page::Home).then_some("active")] { "Home" }
                        a href=(about_href) class=[(state.page == Page::About).then_some("active")] { "About Us" }
                    }
                }
                div class="shell" {
                    (sidebar)
                    main {
                        (content)
                    }
                }
            }
        }
    }
}

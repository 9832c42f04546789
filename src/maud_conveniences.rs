use maud::{Markup, Render, html};

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-5xl font-extrabold text-cyan-400 tracking-wider text-center mb-12" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-2xl font-bold mb-4 text-cyan-400" {(s)}
    }
}

pub fn card(markup: Markup) -> Markup {
    html! {
        div class="bg-gray-800 p-6 rounded-lg shadow-lg mb-8" {
            (markup)
        }
    }
}

pub fn form_element(
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: &str,
) -> Markup {
    let id = format!("field_{name}");
    html! {
        div {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input required type=(input_type) id=(id) name=(name) placeholder=(label) value=(value) class="w-full p-3 bg-gray-700 border-2 border-gray-600 rounded-lg focus:outline-none focus:border-cyan-500 transition-colors" {}
        }
    }
}

pub fn render_table<const N: usize>(
    titles: [&'static str; N],
    rows: impl IntoIterator<Item = Markup>,
) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full text-left text-sm bg-gray-800 rounded" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th scope="col" class="py-3 px-6 font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        (row)
                    }
                }
            }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "fixed top-0 left-0 right-0 z-50 bg-ctp-base/80 backdrop-blur-sm border-b border-ctp-surface1",
            nav {
                class: "max-w-6xl mx-auto px-6 py-4",
                Link {
                    to: Route::Home {},
                    class: "text-2xl font-light text-ctp-mauve hover:text-ctp-blue transition-colors",
                    "Ox"
                }
                code { class: "font-mono text-ctp-subtext0", "v0.1" }
            }
        }
    }
}

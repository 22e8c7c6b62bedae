//! Appearance-specific class helpers for consistent styling across pages.

use crate::domain::Appearance;

// ============================================
// PAGE / SHELL STYLES
// ============================================

pub fn page_background(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "min-h-screen bg-white text-slate-900 font-sans",
        Appearance::Dark => "min-h-screen bg-slate-950 text-slate-100 font-sans",
    }
}

pub fn header_bar(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "sticky top-0 z-40 border-b border-slate-200 bg-white",
        Appearance::Dark => "sticky top-0 z-40 border-b border-slate-800 bg-slate-950/95 backdrop-blur",
    }
}

pub fn sidebar(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "sidebar-transition shrink-0 border-r border-slate-200 bg-white",
        Appearance::Dark => "sidebar-transition shrink-0 border-r border-slate-800 bg-slate-950",
    }
}

pub fn nav_link(appearance: Appearance, active: bool) -> &'static str {
    match (appearance, active) {
        (Appearance::Light, true) => "flex items-center rounded-md px-3 py-2 text-sm font-medium bg-slate-100 text-slate-900",
        (Appearance::Light, false) => "flex items-center rounded-md px-3 py-2 text-sm font-medium text-slate-600 hover:bg-slate-100 hover:text-slate-900",
        (Appearance::Dark, true) => "flex items-center rounded-md px-3 py-2 text-sm font-medium bg-slate-800 text-white",
        (Appearance::Dark, false) => "flex items-center rounded-md px-3 py-2 text-sm font-medium text-slate-400 hover:bg-slate-800/60 hover:text-white",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "rounded-md bg-slate-900 px-4 py-2 text-sm font-semibold text-white hover:bg-slate-700",
        Appearance::Dark => "rounded-md bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400",
    }
}

pub fn btn_outline(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "inline-flex items-center rounded-md border border-slate-200 bg-white px-3 py-2 text-sm font-medium text-slate-700 hover:bg-slate-100",
        Appearance::Dark => "inline-flex items-center rounded-md border border-slate-700 px-3 py-2 text-sm font-medium text-slate-200 hover:bg-slate-800",
    }
}

pub fn btn_ghost(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "inline-flex items-center justify-center rounded-md p-2 text-slate-600 hover:bg-slate-100",
        Appearance::Dark => "inline-flex items-center justify-center rounded-md p-2 text-slate-300 hover:bg-slate-800",
    }
}

pub fn btn_choice(appearance: Appearance, active: bool) -> &'static str {
    match (appearance, active) {
        (Appearance::Light, true) => "rounded-md px-3 py-1.5 text-sm font-semibold bg-slate-900 text-white",
        (Appearance::Light, false) => "rounded-md px-3 py-1.5 text-sm text-slate-600 border border-slate-200 hover:bg-slate-100",
        (Appearance::Dark, true) => "rounded-md px-3 py-1.5 text-sm font-semibold bg-sky-500/20 text-sky-200 border border-sky-500/40",
        (Appearance::Dark, false) => "rounded-md px-3 py-1.5 text-sm text-slate-400 border border-slate-700 hover:border-slate-500",
    }
}

pub fn menu_panel(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "menu-popover mt-2 rounded-md border border-slate-200 bg-white py-1 shadow-lg",
        Appearance::Dark => "menu-popover mt-2 rounded-md border border-slate-700 bg-slate-900 py-1 shadow-lg",
    }
}

pub fn menu_item(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "block w-full px-3 py-2 text-left text-sm text-slate-700 hover:bg-slate-100",
        Appearance::Dark => "block w-full px-3 py-2 text-left text-sm text-slate-200 hover:bg-slate-800",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "w-full rounded-md border border-slate-200 bg-transparent py-2 pl-10 pr-3 text-sm focus:border-slate-400 focus:outline-none",
        Appearance::Dark => "w-full rounded-md border border-slate-700 bg-slate-950 py-2 pl-10 pr-3 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
    }
}

// ============================================
// PANEL / CARD STYLES
// ============================================

pub fn card(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "rounded-lg border border-slate-200 bg-white shadow-sm transition-all duration-200 hover:shadow-lg hover:border-slate-400",
        Appearance::Dark => "rounded-lg border border-slate-800 bg-slate-900/40 shadow-sm transition-all duration-200 hover:border-sky-700",
    }
}

pub fn icon_bubble(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "rounded-full bg-slate-100 p-2 text-lg",
        Appearance::Dark => "rounded-full bg-sky-500/10 p-2 text-lg",
    }
}

pub fn progress_track(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "h-2 w-full overflow-hidden rounded-full bg-slate-100",
        Appearance::Dark => "h-2 w-full overflow-hidden rounded-full bg-slate-800",
    }
}

pub fn progress_fill(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "progress-fill h-full bg-slate-900",
        Appearance::Dark => "progress-fill h-full bg-sky-400",
    }
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "w-full rounded-md border border-slate-200 bg-white shadow-sm",
        Appearance::Dark => "w-full rounded-md border border-slate-800 bg-slate-900/40",
    }
}

pub fn table_header(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "border-b border-slate-200 text-left text-xs uppercase text-slate-500",
        Appearance::Dark => "border-b border-slate-800 bg-slate-900/60 text-left text-xs uppercase text-slate-500",
    }
}

pub fn table_divider(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "divide-y divide-slate-200",
        Appearance::Dark => "divide-y divide-slate-800",
    }
}

pub fn table_row(appearance: Appearance, selected: bool) -> &'static str {
    match (appearance, selected) {
        (Appearance::Light, true) => "bg-slate-50",
        (Appearance::Light, false) => "hover:bg-slate-50",
        (Appearance::Dark, true) => "bg-sky-500/10",
        (Appearance::Dark, false) => "hover:bg-slate-800/40",
    }
}

pub fn section_border(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "border-slate-200",
        Appearance::Dark => "border-slate-800",
    }
}

pub fn page_link(appearance: Appearance, active: bool) -> &'static str {
    match (appearance, active) {
        (Appearance::Light, true) => "rounded-md border border-slate-300 px-3 py-1.5 text-sm font-semibold",
        (Appearance::Light, false) => "rounded-md px-3 py-1.5 text-sm hover:bg-slate-100",
        (Appearance::Dark, true) => "rounded-md border border-slate-600 px-3 py-1.5 text-sm font-semibold text-white",
        (Appearance::Dark, false) => "rounded-md px-3 py-1.5 text-sm text-slate-300 hover:bg-slate-800",
    }
}

pub fn tab(appearance: Appearance, active: bool) -> &'static str {
    match (appearance, active) {
        (Appearance::Light, true) => "rounded-sm bg-white px-3 py-1 text-sm font-medium text-slate-900 shadow-sm",
        (Appearance::Light, false) => "rounded-sm px-3 py-1 text-sm font-medium text-slate-500",
        (Appearance::Dark, true) => "rounded-sm bg-slate-950 px-3 py-1 text-sm font-medium text-white shadow-sm",
        (Appearance::Dark, false) => "rounded-sm px-3 py-1 text-sm font-medium text-slate-400",
    }
}

pub fn tab_list(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "inline-flex items-center rounded-md bg-slate-100 p-1",
        Appearance::Dark => "inline-flex items-center rounded-md bg-slate-800 p-1",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "text-slate-900",
        Appearance::Dark => "text-slate-100",
    }
}

pub fn text_muted(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "text-slate-500",
        Appearance::Dark => "text-slate-400",
    }
}

pub fn label_class(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "block text-xs font-semibold uppercase text-slate-500",
        Appearance::Dark => "block text-xs font-semibold uppercase text-slate-400",
    }
}

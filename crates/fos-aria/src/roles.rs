//! Built-in Role Table
//!
//! WAI-ARIA 1.1 roles with DPUB-ARIA and graphics extensions.
//! Sources: <https://www.w3.org/TR/html-aam-1.0/#html-element-role-mappings>,
//! <https://www.w3.org/TR/wai-aria/roles>

/// Version tag of the built-in table
pub const BUILTIN_VERSION: &str = "wai-aria-1.1";

/// Default value literal as written in the static table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticDefault {
    Bool(bool),
    Int(i64),
    Token(&'static str),
}

/// Static role entry
#[derive(Debug, Clone, Copy)]
pub struct RoleSpec {
    pub name: &'static str,
    pub selectors: &'static [&'static str],
    pub child_roles: &'static [&'static str],
    pub name_from_contents: bool,
    pub defaults: &'static [(&'static str, StaticDefault)],
}

impl RoleSpec {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            selectors: &[],
            child_roles: &[],
            name_from_contents: false,
            defaults: &[],
        }
    }

    const fn selectors(mut self, selectors: &'static [&'static str]) -> Self {
        self.selectors = selectors;
        self
    }

    const fn children(mut self, child_roles: &'static [&'static str]) -> Self {
        self.child_roles = child_roles;
        self
    }

    const fn name_from_contents(mut self) -> Self {
        self.name_from_contents = true;
        self
    }

    const fn defaults(mut self, defaults: &'static [(&'static str, StaticDefault)]) -> Self {
        self.defaults = defaults;
        self
    }
}

use StaticDefault::{Bool, Int, Token};

/// All roles in declaration order
pub static BUILTIN_ROLES: &[RoleSpec] = &[
    RoleSpec::new("alert")
        .children(&["alertdialog"])
        .defaults(&[("live", Token("assertive")), ("atomic", Bool(true))]),
    RoleSpec::new("article").selectors(&["article"]),
    // Only a document's own header and footer; sectioning content scopes them
    RoleSpec::new("banner").selectors(&["body > header"]),
    RoleSpec::new("button")
        .selectors(&[
            "button",
            r#"input[type="button"]"#,
            r#"input[type="image"]"#,
            r#"input[type="reset"]"#,
            r#"input[type="submit"]"#,
            "summary",
        ])
        .name_from_contents(),
    RoleSpec::new("cell")
        .selectors(&["td"])
        .children(&["gridcell", "rowheader"]),
    RoleSpec::new("checkbox")
        .selectors(&[r#"input[type="checkbox"]"#])
        .children(&["menuitemcheckbox", "switch"])
        .name_from_contents()
        .defaults(&[("checked", Token("false"))]),
    RoleSpec::new("columnheader")
        .selectors(&[r#"th[scope="col"]"#])
        .name_from_contents(),
    RoleSpec::new("combobox")
        .selectors(&[
            "input:not([type])[list]",
            r#"input[type="email"][list]"#,
            r#"input[type="search"][list]"#,
            r#"input[type="tel"][list]"#,
            r#"input[type="text"][list]"#,
            r#"input[type="url"][list]"#,
            "select:not([size]):not([multiple])",
            r#"select[size="0"]:not([multiple])"#,
            r#"select[size="1"]:not([multiple])"#,
        ])
        .defaults(&[("expanded", Bool(false)), ("haspopup", Token("listbox"))]),
    RoleSpec::new("command").children(&["button", "link", "menuitem"]),
    RoleSpec::new("complementary").selectors(&["aside"]),
    RoleSpec::new("contentinfo").selectors(&["body > footer"]),
    RoleSpec::new("composite").children(&["grid", "select", "spinbutton", "tablist"]),
    RoleSpec::new("definition").selectors(&["dd"]),
    RoleSpec::new("dialog")
        .selectors(&["dialog"])
        .children(&["alertdialog"]),
    RoleSpec::new("doc-backlink").name_from_contents(),
    RoleSpec::new("doc-biblioref").name_from_contents(),
    RoleSpec::new("doc-glossref").name_from_contents(),
    RoleSpec::new("doc-noteref").name_from_contents(),
    RoleSpec::new("document")
        .selectors(&["body"])
        .children(&["article", "graphics-document"]),
    RoleSpec::new("figure").selectors(&["figure"]),
    RoleSpec::new("form").selectors(&["form[aria-label]", "form[aria-labelledby]", "form[title]"]),
    RoleSpec::new("grid").children(&["treegrid"]),
    RoleSpec::new("gridcell")
        .children(&["columnheader", "rowheader"])
        .name_from_contents(),
    RoleSpec::new("group")
        .selectors(&["details", "optgroup"])
        .children(&["row", "select", "toolbar", "graphics-object"]),
    RoleSpec::new("heading")
        .selectors(&["h1", "h2", "h3", "h4", "h5", "h6"])
        .name_from_contents()
        .defaults(&[("level", Int(2))]),
    RoleSpec::new("img")
        .selectors(&[r#"img:not([alt=""])"#, "graphics-symbol"])
        .children(&["doc-cover"]),
    RoleSpec::new("input")
        .children(&["checkbox", "option", "radio", "slider", "spinbutton", "textbox"]),
    RoleSpec::new("landmark").children(&[
        "banner",
        "complementary",
        "contentinfo",
        "doc-acknowledgments",
        "doc-afterword",
        "doc-appendix",
        "doc-bibliography",
        "doc-chapter",
        "doc-conclusion",
        "doc-credits",
        "doc-endnotes",
        "doc-epilogue",
        "doc-errata",
        "doc-foreword",
        "doc-glossary",
        "doc-introduction",
        "doc-part",
        "doc-preface",
        "doc-prologue",
        "form",
        "main",
        "navigation",
        "region",
        "search",
    ]),
    RoleSpec::new("link")
        .selectors(&["a[href]", "area[href]", "link[href]"])
        .children(&["doc-backlink", "doc-biblioref", "doc-glossref", "doc-noteref"])
        .name_from_contents(),
    RoleSpec::new("list")
        .selectors(&["dl", "ol", "ul"])
        .children(&["directory", "feed"]),
    RoleSpec::new("listbox")
        .selectors(&[
            "select[multiple]",
            r#"select[size]:not([size="0"]):not([size="1"])"#,
        ])
        .defaults(&[("orientation", Token("vertical"))]),
    RoleSpec::new("listitem")
        .selectors(&["dt", "ul > li", "ol > li"])
        .children(&["doc-biblioentry", "doc-endnote", "treeitem"]),
    RoleSpec::new("log").defaults(&[("live", Token("polite"))]),
    RoleSpec::new("main").selectors(&["main"]),
    RoleSpec::new("math").selectors(&["math"]),
    RoleSpec::new("menu")
        .selectors(&[r#"menu[type="context"]"#])
        .children(&["menubar"])
        .defaults(&[("orientation", Token("vertical"))]),
    RoleSpec::new("menubar").defaults(&[("orientation", Token("horizontal"))]),
    RoleSpec::new("menuitem")
        .selectors(&[r#"menuitem[type="command"]"#])
        .children(&["menuitemcheckbox"])
        .name_from_contents(),
    RoleSpec::new("menuitemcheckbox")
        .selectors(&[r#"menuitem[type="checkbox"]"#])
        .children(&["menuitemradio"])
        .name_from_contents()
        .defaults(&[("checked", Token("false"))]),
    RoleSpec::new("menuitemradio")
        .selectors(&[r#"menuitem[type="radio"]"#])
        .name_from_contents()
        .defaults(&[("checked", Token("false"))]),
    RoleSpec::new("navigation")
        .selectors(&["nav"])
        .children(&["doc-index", "doc-pagelist", "doc-toc"]),
    RoleSpec::new("note").children(&["doc-notice", "doc-tip"]),
    RoleSpec::new("option")
        .selectors(&["option"])
        .children(&["treeitem"])
        .name_from_contents()
        .defaults(&[("selected", Token("false"))]),
    RoleSpec::new("progressbar").selectors(&["progress"]),
    RoleSpec::new("radio")
        .selectors(&[r#"input[type="radio"]"#])
        .children(&["menuitemradio"])
        .name_from_contents()
        .defaults(&[("checked", Token("false"))]),
    RoleSpec::new("range").children(&["progressbar", "scrollbar", "slider", "spinbutton"]),
    RoleSpec::new("region").selectors(&[
        "section[aria-label]",
        "section[aria-labelledby]",
        "section[title]",
    ]),
    RoleSpec::new("roletype").children(&["structure", "widget", "window"]),
    RoleSpec::new("row").selectors(&["tr"]).name_from_contents(),
    RoleSpec::new("rowheader")
        .selectors(&[r#"th[scope="row"]"#])
        .name_from_contents(),
    RoleSpec::new("rowgroup")
        .selectors(&["tbody", "thead", "tfoot"])
        .name_from_contents(),
    // valuenow sits halfway between valuemin and valuemax
    RoleSpec::new("scrollbar").defaults(&[
        ("orientation", Token("vertical")),
        ("valuemin", Int(0)),
        ("valuemax", Int(100)),
        ("valuenow", Int(50)),
    ]),
    RoleSpec::new("searchbox").selectors(&[r#"input[type="search"]:not([list])"#]),
    RoleSpec::new("section").children(&[
        "alert",
        "cell",
        "definition",
        "doc-abstract",
        "doc-colophon",
        "doc-credit",
        "doc-dedication",
        "doc-epigraph",
        "doc-example",
        "doc-footnote",
        "doc-qna",
        "figure",
        "group",
        "img",
        "landmark",
        "list",
        "listitem",
        "log",
        "marquee",
        "math",
        "note",
        "status",
        "table",
        "tabpanel",
        "term",
        "tooltip",
    ]),
    RoleSpec::new("sectionhead")
        .children(&["columnheader", "doc-subtitle", "heading", "rowheader", "tab"])
        .name_from_contents(),
    RoleSpec::new("select").children(&["combobox", "listbox", "menu", "radiogroup", "tree"]),
    RoleSpec::new("separator")
        .selectors(&["hr"])
        .children(&["doc-pagebreak"])
        .defaults(&[
            ("orientation", Token("horizontal")),
            ("valuemin", Int(0)),
            ("valuemax", Int(100)),
            ("valuenow", Int(50)),
        ]),
    RoleSpec::new("slider")
        .selectors(&[r#"input[type="range"]"#])
        .defaults(&[
            ("orientation", Token("horizontal")),
            ("valuemin", Int(0)),
            ("valuemax", Int(100)),
            ("valuenow", Int(50)),
        ]),
    // spinbuttons have no implicit valuemin/valuemax
    RoleSpec::new("spinbutton")
        .selectors(&[r#"input[type="number"]"#])
        .defaults(&[("valuenow", Int(0))]),
    RoleSpec::new("status")
        .selectors(&["output"])
        .children(&["timer"])
        .defaults(&[("live", Token("polite")), ("atomic", Bool(true))]),
    RoleSpec::new("switch")
        .name_from_contents()
        .defaults(&[("checked", Bool(false))]),
    RoleSpec::new("structure").children(&[
        "application",
        "document",
        "none",
        "presentation",
        "rowgroup",
        "section",
        "sectionhead",
        "separator",
    ]),
    RoleSpec::new("tab")
        .name_from_contents()
        .defaults(&[("selected", Bool(false))]),
    RoleSpec::new("table").selectors(&["table"]).children(&["grid"]),
    RoleSpec::new("tablist").defaults(&[("orientation", Token("horizontal"))]),
    RoleSpec::new("term").selectors(&["dfn", "dt"]),
    RoleSpec::new("textbox")
        .selectors(&[
            "input:not([type]):not([list])",
            r#"input[type="email"]:not([list])"#,
            r#"input[type="tel"]:not([list])"#,
            r#"input[type="text"]:not([list])"#,
            r#"input[type="url"]:not([list])"#,
            "textarea",
        ])
        .children(&["searchbox"]),
    RoleSpec::new("toolbar").defaults(&[("orientation", Token("horizontal"))]),
    RoleSpec::new("tooltip").name_from_contents(),
    RoleSpec::new("tree")
        .children(&["treegrid"])
        .defaults(&[("orientation", Token("vertical"))]),
    RoleSpec::new("treeitem").name_from_contents(),
    RoleSpec::new("widget").children(&[
        "command",
        "composite",
        "gridcell",
        "input",
        "range",
        "row",
        "separator",
        "tab",
    ]),
    RoleSpec::new("window").children(&["dialog"]),
];

#[cfg(test)]
fn builtin_role(name: &str) -> Option<&'static RoleSpec> {
    BUILTIN_ROLES.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for spec in BUILTIN_ROLES {
            assert!(seen.insert(spec.name), "duplicate role {}", spec.name);
        }
    }

    #[test]
    fn test_lookup() {
        let heading = builtin_role("heading").unwrap();
        assert!(heading.name_from_contents);
        assert_eq!(heading.selectors.len(), 6);
        assert_eq!(heading.defaults, &[("level", Int(2))]);
        assert_eq!(builtin_role("banner").unwrap().selectors, &["body > header"]);
        assert!(builtin_role("header").is_none());
    }
}

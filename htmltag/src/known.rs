//! Well-known tag and attribute names.
//!
//! These mirror the identifiers a host HTML writer usually ships with. Each
//! identifier renders as its lowercase textual form, so `KnownTag::A` and
//! `"a"` produce identical markup.

macro_rules! known_names {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }
        impl $name {
            /// Every identifier in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The lowercase textual form of this identifier.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }

            /// Look up an identifier by name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|known| known.as_str().eq_ignore_ascii_case(name))
            }
        }
        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

known_names! {
    /// A tag the writer knows by identifier.
    KnownTag {
        A => "a", Abbr => "abbr", Area => "area", Article => "article", Aside => "aside",
        B => "b", Base => "base", Blockquote => "blockquote", Body => "body", Br => "br",
        Button => "button", Code => "code", Col => "col", Details => "details",
        Dialog => "dialog", Div => "div", Em => "em", Embed => "embed", Footer => "footer",
        Form => "form", H1 => "h1", H2 => "h2", H3 => "h3", H4 => "h4", H5 => "h5", H6 => "h6",
        Head => "head", Header => "header", Hr => "hr", Html => "html", I => "i", Img => "img",
        Input => "input", Label => "label", Li => "li", Link => "link", Main => "main",
        Menu => "menu", MenuItem => "menuitem", Meta => "meta", Nav => "nav", Ol => "ol",
        P => "p", Param => "param", Pre => "pre", Progress => "progress", Section => "section",
        Small => "small", Source => "source", Span => "span", Strong => "strong",
        Table => "table", Td => "td", Th => "th", Time => "time", Title => "title",
        Tr => "tr", Track => "track", Ul => "ul", Wbr => "wbr",
    }
}

known_names! {
    /// An attribute the writer knows by identifier.
    KnownAttribute {
        Alt => "alt", Class => "class", Content => "content", Disabled => "disabled",
        For => "for", Height => "height", Href => "href", Id => "id", Name => "name",
        Rel => "rel", Src => "src", Style => "style", Tabindex => "tabindex",
        Target => "target", Title => "title", Type => "type", Value => "value",
        Width => "width",
    }
}

/// Elements that never get a closing tag. The most common ones come first.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "img", "br", "input", "meta", "area", "hr", "base", "col", "command", "embed", "keygen",
    "link", "param", "source", "track", "wbr",
];

/// Returns `true` if `name` is a self-closing element, ignoring ASCII case.
pub fn is_self_closing(name: &str) -> bool {
    SELF_CLOSING_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_render_lowercase() {
        assert_eq!(KnownTag::MenuItem.as_str(), "menuitem");
        assert_eq!(KnownTag::H2.to_string(), "h2");
        assert_eq!(KnownAttribute::Href.as_ref(), "href");
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(KnownTag::from_name("IMG"), Some(KnownTag::Img));
        assert_eq!(KnownAttribute::from_name("Class"), Some(KnownAttribute::Class));
        assert_eq!(KnownTag::from_name("blink"), None);
    }

    #[test]
    fn self_closing_set() {
        for tag in ["img", "BR", "keygen", "wbr"] {
            assert!(is_self_closing(tag), "{tag} should be self-closing");
        }
        for tag in ["a", "div", "anchor", "write"] {
            assert!(!is_self_closing(tag), "{tag} should not be self-closing");
        }
    }
}

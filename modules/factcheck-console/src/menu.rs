// Dropdown state for the language and provider pickers.
//
// A single controller owns the open menu, so at most one dropdown is open at
// a time: opening one closes the other.

use crate::catalog::languages::{self, Language};
use crate::catalog::providers::Provider;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Language,
    Provider,
}

#[derive(Debug, Default)]
pub struct MenuController {
    active: Option<MenuKind>,
    language_query: String,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<MenuKind> {
        self.active
    }

    pub fn is_open(&self, kind: MenuKind) -> bool {
        self.active == Some(kind)
    }

    /// Opening the language menu clears its search text.
    pub fn open(&mut self, kind: MenuKind) {
        if kind == MenuKind::Language {
            self.language_query.clear();
        }
        self.active = Some(kind);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// The dropdown button was pressed.
    pub fn toggle(&mut self, kind: MenuKind) {
        if self.is_open(kind) {
            self.close();
        } else {
            self.open(kind);
        }
    }

    /// A click landed inside `container` (`None` = outside every dropdown).
    /// Clicks outside the open menu's container close it.
    pub fn click(&mut self, container: Option<MenuKind>) {
        if self.active.is_some() && self.active != container {
            self.close();
        }
    }

    pub fn key(&mut self, key: &str) {
        if key == "Escape" {
            self.close();
        }
    }

    pub fn language_query(&self) -> &str {
        &self.language_query
    }

    pub fn set_language_query(&mut self, query: &str) {
        self.language_query = query.to_string();
    }

    /// Catalog entries matching the current search text.
    pub fn visible_languages(&self) -> Vec<Language> {
        languages::filter(&self.language_query)
    }

    pub fn select_language(&mut self, session: &mut Session, language: Language) {
        session.language = language;
        self.close();
    }

    pub fn select_provider(&mut self, session: &mut Session, provider: Provider) {
        session.provider = provider;
        self.close();
    }
}

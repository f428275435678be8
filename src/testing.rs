//! In-memory page used by unit tests in place of the live document.

use std::collections::HashMap;

use crate::consts::STORAGE_KEY;
use crate::error::ChromeError;
use crate::menu::{MenuChange, MenuId, MenuSurface};
use crate::theme::{Theme, ThemeSurface};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FakeThemeToggle {
    pub label: String,
    pub glyph: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeMenuToggle {
    pub controls: MenuId,
    pub expanded: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FakeHost {
    pub is_menu_host: bool,
    pub toggles: Vec<FakeMenuToggle>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeRegion {
    /// Index into `FakePage::hosts`; `None` for a detached region.
    pub host: Option<usize>,
    pub id: Option<MenuId>,
    pub open_class: bool,
}

#[derive(Debug)]
pub struct FakePage {
    /// `None` models storage disabled by the browser.
    pub storage: Option<HashMap<String, String>>,
    pub storage_key: String,
    pub prefers_dark: Option<bool>,
    pub root_theme: Option<String>,
    pub theme_toggle: Option<FakeThemeToggle>,
    pub theme_toggle_creations: usize,
    pub hosts: Vec<FakeHost>,
    pub regions: Vec<FakeRegion>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self {
            storage: Some(HashMap::new()),
            storage_key: STORAGE_KEY.to_owned(),
            prefers_dark: None,
            root_theme: None,
            theme_toggle: None,
            theme_toggle_creations: 0,
            hosts: Vec::new(),
            regions: Vec::new(),
        }
    }
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(value: &str) -> Self {
        let mut page = Self::new();
        if let Some(storage) = page.storage.as_mut() {
            storage.insert(STORAGE_KEY.to_owned(), value.to_owned());
        }
        page
    }

    pub fn stored(&self) -> Option<&str> {
        self.storage.as_ref()?.get(&self.storage_key).map(String::as_str)
    }

    /// Add `count` regions, each under its own fresh host. Returns their indices.
    pub fn add_hosted_regions(&mut self, count: usize) -> Vec<usize> {
        (0..count)
            .map(|_| {
                self.hosts.push(FakeHost::default());
                self.regions.push(FakeRegion { host: Some(self.hosts.len() - 1), ..FakeRegion::default() });
                self.regions.len() - 1
            })
            .collect()
    }

    pub fn add_detached_region(&mut self) -> usize {
        self.regions.push(FakeRegion::default());
        self.regions.len() - 1
    }

    pub fn toggle_for(&self, id: MenuId) -> Option<&FakeMenuToggle> {
        self.hosts.iter().flat_map(|h| h.toggles.iter()).find(|t| t.controls == id)
    }

    pub fn region_by_id(&self, id: MenuId) -> Option<&FakeRegion> {
        self.regions.iter().find(|r| r.id == Some(id))
    }

    pub fn toggle_count(&self) -> usize {
        self.hosts.iter().map(|h| h.toggles.len()).sum()
    }

    pub fn open_count(&self) -> usize {
        self.regions.iter().filter(|r| r.open_class).count()
    }
}

impl ThemeSurface for FakePage {
    fn stored_theme(&self) -> Option<String> {
        self.stored().map(str::to_owned)
    }

    fn store_theme(&mut self, theme: Theme) {
        let key = self.storage_key.clone();
        if let Some(storage) = self.storage.as_mut() {
            storage.insert(key, theme.as_str().to_owned());
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn root_theme(&self) -> Option<String> {
        self.root_theme.clone()
    }

    fn set_root_theme(&mut self, theme: Theme) {
        self.root_theme = Some(theme.as_str().to_owned());
    }

    fn has_toggle(&self) -> bool {
        self.theme_toggle.is_some()
    }

    fn create_toggle(&mut self) -> Result<(), ChromeError> {
        self.theme_toggle = Some(FakeThemeToggle::default());
        self.theme_toggle_creations += 1;
        Ok(())
    }

    fn update_toggle(&mut self, label: &str, glyph: &str) {
        if let Some(toggle) = self.theme_toggle.as_mut() {
            toggle.label = label.to_owned();
            toggle.glyph = glyph.to_owned();
        }
    }
}

impl MenuSurface for FakePage {
    type Region = usize;

    fn regions(&self) -> Vec<usize> {
        (0..self.regions.len()).collect()
    }

    fn has_host(&self, region: &usize) -> bool {
        self.regions[*region].host.is_some()
    }

    fn host_has_toggle(&self, region: &usize) -> bool {
        self.regions[*region].host.is_some_and(|h| !self.hosts[h].toggles.is_empty())
    }

    fn equip(&mut self, region: &usize, id: MenuId) -> Result<(), ChromeError> {
        let host = self.regions[*region].host.ok_or(ChromeError::MissingGlobal("host"))?;
        self.hosts[host].is_menu_host = true;
        self.hosts[host].toggles.push(FakeMenuToggle { controls: id, expanded: false });
        self.regions[*region].id = Some(id);
        Ok(())
    }

    fn project(&mut self, change: MenuChange) {
        for region in self.regions.iter_mut().filter(|r| r.id == Some(change.id)) {
            region.open_class = change.open;
        }
        for toggle in self.hosts.iter_mut().flat_map(|h| h.toggles.iter_mut()) {
            if toggle.controls == change.id {
                toggle.expanded = change.open;
            }
        }
    }
}

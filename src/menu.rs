//! Mobile menu discovery and the open/close state machine.
//!
//! DESIGN
//! ======
//! [`MenuController`] owns the source of truth: the ordered registry of
//! equipped regions and a single `open` slot, so at most one region can be
//! open by construction. Every input (toggle click, click elsewhere, resize)
//! goes through the controller and comes back as a list of [`MenuChange`]s
//! that the host projects onto the DOM (`is-open` class, `aria-expanded`).
//! Nothing is read back from the document to answer "which menu is open".
//!
//! Click routing does not depend on event propagation. The host classifies
//! every document click into a [`ClickTarget`] and hands it to
//! [`MenuController::click`].

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::MENU_ID_PREFIX;
use crate::error::ChromeError;

/// Identifier of an equipped region, rendered as `mobile-menu-<N>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(u32);

impl MenuId {
    /// Sequence number, starting at 1.
    #[must_use]
    pub fn seq(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MENU_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for MenuId {
    type Err = ChromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChromeError::InvalidMenuId(s.to_owned());
        let digits = s.strip_prefix(MENU_ID_PREFIX).ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match digits.parse::<u32>() {
            Ok(seq) if seq >= 1 => Ok(Self(seq)),
            _ => Err(invalid()),
        }
    }
}

/// One region's new visual state, to be projected by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuChange {
    pub id: MenuId,
    pub open: bool,
}

impl MenuChange {
    fn opened(id: MenuId) -> Self {
        Self { id, open: true }
    }

    fn closed(id: MenuId) -> Self {
        Self { id, open: false }
    }
}

/// Where a document click landed, as far as menus are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// On (or inside) the disclosure toggle of a region.
    Toggle(MenuId),
    /// Inside a region's own content.
    InsideMenu(MenuId),
    /// Anywhere else.
    Outside,
}

impl ClickTarget {
    /// Classify a click from what the host found around its target.
    ///
    /// `toggle_controls` is the `aria-controls` of the nearest enclosing
    /// disclosure toggle, `region_id` the `id` of the nearest enclosing menu
    /// region. A toggle wins over a region. A malformed `aria-controls` falls
    /// through to the region check, and a region without a generated id
    /// (never equipped) counts as outside.
    #[must_use]
    pub fn classify(toggle_controls: Option<&str>, region_id: Option<&str>) -> Self {
        if let Some(Ok(id)) = toggle_controls.map(str::parse::<MenuId>) {
            return Self::Toggle(id);
        }
        match region_id.map(str::parse::<MenuId>) {
            Some(Ok(id)) => Self::InsideMenu(id),
            _ => Self::Outside,
        }
    }
}

/// Page effects needed for discovery and projection.
pub trait MenuSurface {
    /// Handle to a region element.
    type Region;

    /// Every element currently carrying the menu marker, in document order.
    fn regions(&self) -> Vec<Self::Region>;
    /// Whether the region has a parent element to host its toggle.
    fn has_host(&self, region: &Self::Region) -> bool;
    /// Whether the region's host already contains a disclosure toggle.
    fn host_has_toggle(&self, region: &Self::Region) -> bool;
    /// Mark the host, assign `id` to the region, and insert a closed toggle
    /// controlling it immediately before the region.
    fn equip(&mut self, region: &Self::Region, id: MenuId) -> Result<(), ChromeError>;
    /// Reflect `change` on the region's open marker and its toggle.
    fn project(&mut self, change: MenuChange);
}

/// Registry of equipped regions and the single open slot.
#[derive(Debug)]
pub struct MenuController {
    /// `None` once every `u32` sequence number has been handed out.
    next_seq: Option<u32>,
    menus: Vec<MenuId>,
    open: Option<MenuId>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self { next_seq: Some(1), menus: Vec::new(), open: None }
    }
}

impl MenuController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Registration ---

    /// Allocate the next id and add it to the registry, closed.
    ///
    /// Ids are never reused for the lifetime of the controller; once the
    /// sequence is exhausted every further call fails.
    pub fn register(&mut self) -> Result<MenuId, ChromeError> {
        let id = self.allocate()?;
        self.menus.push(id);
        Ok(id)
    }

    fn allocate(&mut self) -> Result<MenuId, ChromeError> {
        let seq = self.next_seq.ok_or(ChromeError::MenuIdsExhausted)?;
        self.next_seq = seq.checked_add(1);
        Ok(MenuId(seq))
    }

    /// Equip every unequipped region on `surface`; returns how many were equipped.
    ///
    /// Regions with no parent, or whose parent already holds a toggle, are
    /// skipped. Safe to call again after the document changes.
    pub fn discover<S: MenuSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let mut equipped = 0;
        for region in surface.regions() {
            if !surface.has_host(&region) {
                log::debug!("skipping menu region without a host");
                continue;
            }
            if surface.host_has_toggle(&region) {
                log::debug!("skipping menu region whose host already has a toggle");
                continue;
            }
            let id = match self.allocate() {
                Ok(id) => id,
                Err(err) => {
                    log::warn!("menu discovery stopped: {err}");
                    break;
                }
            };
            match surface.equip(&region, id) {
                Ok(()) => {
                    self.menus.push(id);
                    equipped += 1;
                }
                Err(err) => log::warn!("failed to equip {id}: {err}"),
            }
        }
        log::debug!("menu discovery equipped {equipped}, {} registered", self.menus.len());
        equipped
    }

    // --- Inputs ---

    /// Flip one region. Opening it closes every other region first.
    ///
    /// A toggle this controller never equipped behaves like any other click
    /// on the page: every region closes.
    pub fn toggle(&mut self, id: MenuId) -> Vec<MenuChange> {
        if !self.menus.contains(&id) {
            log::debug!("toggle for unknown menu {id}, closing all");
            return self.close_all(None);
        }
        if self.open == Some(id) {
            return self.close_all(None);
        }
        let mut changes = self.close_all(Some(id));
        self.open = Some(id);
        changes.push(MenuChange::opened(id));
        changes
    }

    /// Close every registered region except `except`.
    ///
    /// A close change is emitted for each affected region whether or not it
    /// was open, so the projection always ends consistent.
    pub fn close_all(&mut self, except: Option<MenuId>) -> Vec<MenuChange> {
        if self.open.is_some() && self.open != except {
            self.open = None;
        }
        self.menus
            .iter()
            .filter(|id| Some(**id) != except)
            .map(|id| MenuChange::closed(*id))
            .collect()
    }

    /// Route a classified document click.
    pub fn click(&mut self, target: ClickTarget) -> Vec<MenuChange> {
        match target {
            ClickTarget::Toggle(id) => self.toggle(id),
            ClickTarget::InsideMenu(id) if self.menus.contains(&id) => Vec::new(),
            ClickTarget::InsideMenu(_) | ClickTarget::Outside => self.close_all(None),
        }
    }

    /// Close everything once the viewport reaches the desktop breakpoint.
    pub fn resize(&mut self, width: f64, breakpoint: f64) -> Vec<MenuChange> {
        if width >= breakpoint { self.close_all(None) } else { Vec::new() }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }

    /// The open region, if any.
    #[must_use]
    pub fn open_menu(&self) -> Option<MenuId> {
        self.open
    }

    /// Registered ids in discovery order.
    #[must_use]
    pub fn ids(&self) -> &[MenuId] {
        &self.menus
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

/// Apply `changes` to `surface` in order.
pub fn project<S: MenuSurface + ?Sized>(surface: &mut S, changes: &[MenuChange]) {
    for change in changes {
        surface.project(*change);
    }
}

//! Page and clip scopes.
//!
//! A page is a `tikzpicture` environment and a clip region is a `scope`
//! nested inside it. Only one clip level exists: a new clip closes the
//! previous one. Color definitions are local to the scope they appear in, so
//! every transition resets the [`StyleState`].

use crate::drawing_state::StyleState;
use crate::error::TikzResult;
use crate::writer::DocumentWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageState {
    NoPage,
    /// A page is open. `pristine` while nothing has been drawn on the page
    /// opened at device open.
    Open { pristine: bool },
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipState {
    NoClip,
    ClipOpen,
}

/// What `new_page` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageTransition {
    /// The untouched initial page was reused; no scope boundary was crossed.
    Reused,
    /// A new page scope was opened.
    Opened,
}

#[derive(Debug)]
pub(crate) struct ScopeManager {
    page: PageState,
    clip: ClipState,
    bare_bones: bool,
    pages_opened: usize,
}

impl ScopeManager {
    pub(crate) fn new(bare_bones: bool) -> Self {
        Self {
            page: PageState::NoPage,
            clip: ClipState::NoClip,
            bare_bones,
            pages_opened: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn page_state(&self) -> PageState {
        self.page
    }

    #[cfg(test)]
    pub(crate) fn clip_state(&self) -> ClipState {
        self.clip
    }

    pub(crate) fn pages_opened(&self) -> usize {
        self.pages_opened
    }

    /// Open the page that exists right after device open.
    pub(crate) fn open_initial_page(
        &mut self,
        writer: &mut DocumentWriter,
        style: &mut StyleState,
    ) -> TikzResult<()> {
        self.begin_page(writer, style)?;
        self.page = PageState::Open { pristine: true };
        Ok(())
    }

    pub(crate) fn new_page(
        &mut self,
        writer: &mut DocumentWriter,
        style: &mut StyleState,
    ) -> TikzResult<PageTransition> {
        match self.page {
            PageState::Open { pristine: true } => {
                self.page = PageState::Open { pristine: false };
                Ok(PageTransition::Reused)
            }
            PageState::Open { pristine: false } => {
                self.close_clip(writer, style)?;
                self.end_page(writer, style)?;
                self.begin_page(writer, style)?;
                Ok(PageTransition::Opened)
            }
            PageState::NoPage | PageState::Closed => {
                self.begin_page(writer, style)?;
                Ok(PageTransition::Opened)
            }
        }
    }

    /// Replace any open clip scope with a new one restricted by `clip_statement`.
    pub(crate) fn clip(
        &mut self,
        writer: &mut DocumentWriter,
        style: &mut StyleState,
        clip_statement: &str,
    ) -> TikzResult<()> {
        if !matches!(self.page, PageState::Open { .. }) {
            self.begin_page(writer, style)?;
        }
        self.mark_drawn();
        self.close_clip(writer, style)?;

        writer.write("\\begin{scope}\n")?;
        writer.write(clip_statement)?;
        self.clip = ClipState::ClipOpen;
        style.reset();
        Ok(())
    }

    /// Close the clip scope, then the page.
    pub(crate) fn close(
        &mut self,
        writer: &mut DocumentWriter,
        style: &mut StyleState,
    ) -> TikzResult<()> {
        self.close_clip(writer, style)?;
        if matches!(self.page, PageState::Open { .. }) {
            self.end_page(writer, style)?;
        }
        Ok(())
    }

    /// Something was drawn, so the initial page can no longer be reused.
    pub(crate) fn mark_drawn(&mut self) {
        if let PageState::Open { pristine: true } = self.page {
            self.page = PageState::Open { pristine: false };
        }
    }

    fn begin_page(&mut self, writer: &mut DocumentWriter, style: &mut StyleState) -> TikzResult<()> {
        self.pages_opened += 1;
        log::debug!(target: "tikz", "begin page {}", self.pages_opened);
        if !self.bare_bones {
            writer.write("\\begin{tikzpicture}[x=1pt,y=1pt]\n")?;
        }
        self.page = PageState::Open { pristine: false };
        style.reset();
        Ok(())
    }

    fn end_page(&mut self, writer: &mut DocumentWriter, style: &mut StyleState) -> TikzResult<()> {
        if !self.bare_bones {
            writer.write("\\end{tikzpicture}\n")?;
        }
        self.page = PageState::Closed;
        style.reset();
        Ok(())
    }

    fn close_clip(&mut self, writer: &mut DocumentWriter, style: &mut StyleState) -> TikzResult<()> {
        if self.clip == ClipState::ClipOpen {
            writer.write("\\end{scope}\n")?;
            self.clip = ClipState::NoClip;
            style.reset();
        }
        Ok(())
    }
}

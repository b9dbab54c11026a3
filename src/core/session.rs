use super::reveal::RevealSchedule;

/// Visibility of the letter overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

/// Everything the session reacts to: user gestures, the one-shot hint timer
/// and the per-frame clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// Double tap / double click that landed on the heart.
    DoubleTapSolid,
    /// Close button on the letter.
    Close,
    /// "Yes, take me fullscreen" on the start prompt.
    AcceptFullscreen,
    /// The hint timer armed at load has fired.
    HintTimerElapsed,
    /// One rendered frame, `dt_sec` after the previous one.
    Tick { dt_sec: f32 },
}

/// Side effects the browser layer applies after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    ShowLetter,
    HideLetter,
    /// Rewind the letter audio and start it.
    PlayAudio,
    /// Pause the letter audio and rewind it.
    StopAudio,
    RevealLine(usize),
    ShowHint,
    HideHint,
    CancelHintTimer,
    HideFullscreenPrompt,
    RequestFullscreen,
}

/// UI state for one page load: the letter overlay, the delayed hint and the
/// fullscreen prompt.
///
/// `handle` is the only mutator. Inputs that are not valid in the current
/// state are ignored and produce no effects.
#[derive(Clone, Debug)]
pub struct Session {
    overlay: OverlayState,
    hint_visible: bool,
    hint_suppressed: bool,
    fullscreen_prompt_visible: bool,
    reveal: RevealSchedule,
}

impl Session {
    pub fn new(line_count: usize, line_stagger_sec: f32) -> Self {
        Self {
            overlay: OverlayState::Closed,
            hint_visible: false,
            hint_suppressed: false,
            fullscreen_prompt_visible: true,
            reveal: RevealSchedule::staggered(line_count, line_stagger_sec),
        }
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay == OverlayState::Open
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn fullscreen_prompt_visible(&self) -> bool {
        self.fullscreen_prompt_visible
    }

    pub fn revealed_lines(&self) -> usize {
        self.reveal.revealed_count()
    }

    /// Apply one input, appending resulting side effects to `out`.
    pub fn handle(&mut self, input: Input, out: &mut Vec<Effect>) {
        match input {
            Input::DoubleTapSolid => self.open(out),
            Input::Close => self.close(out),
            Input::AcceptFullscreen => {
                if self.fullscreen_prompt_visible {
                    self.fullscreen_prompt_visible = false;
                    out.push(Effect::HideFullscreenPrompt);
                    out.push(Effect::RequestFullscreen);
                }
            }
            Input::HintTimerElapsed => {
                if !self.hint_suppressed && !self.hint_visible && !self.is_open() {
                    self.hint_visible = true;
                    out.push(Effect::ShowHint);
                }
            }
            Input::Tick { dt_sec } => {
                // Reveal time is clamped frame time; a hidden tab delays the lines.
                if self.is_open() {
                    out.extend(self.reveal.advance(dt_sec).into_iter().map(Effect::RevealLine));
                }
            }
        }
    }

    fn open(&mut self, out: &mut Vec<Effect>) {
        if self.is_open() {
            return;
        }
        self.overlay = OverlayState::Open;
        if self.hint_visible {
            self.hint_visible = false;
            out.push(Effect::HideHint);
        }
        if !self.hint_suppressed {
            self.hint_suppressed = true;
            out.push(Effect::CancelHintTimer);
        }
        out.push(Effect::ShowLetter);
        out.push(Effect::PlayAudio);
        self.reveal.start();
        out.extend(self.reveal.advance(0.0).into_iter().map(Effect::RevealLine));
    }

    fn close(&mut self, out: &mut Vec<Effect>) {
        if !self.is_open() {
            return;
        }
        self.overlay = OverlayState::Closed;
        self.reveal.stop();
        out.push(Effect::StopAudio);
        out.push(Effect::HideLetter);
    }
}

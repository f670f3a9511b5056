//! Shared UI theme: the FreeMov dark palette expressed as Tailwind class
//! constants so every themed primitive stays visually consistent. The palette
//! is fixed at build time and not user-configurable.

pub struct Theme;

impl Theme {
    /// Body text on the dark background.
    pub const TEXT: &'static str = "text-base text-white";

    /// Large brand title in the primary purple.
    pub const TITLE: &'static str = "text-4xl font-bold text-[#7F00FF]";

    /// Section heading.
    pub const SUBTITLE: &'static str = "text-2xl font-bold text-white";

    /// Inline link in the primary purple.
    pub const LINK: &'static str = "text-base text-[#7F00FF] hover:underline";

    /// Secondary/caption text.
    pub const CAPTION: &'static str = "text-xs text-[#B3B3B3]";

    /// Dark form input with a purple focus ring.
    pub const INPUT: &'static str = "w-full rounded bg-[#333333] px-4 py-3.5 text-base text-white placeholder:text-[#8c8c8c] focus:outline-none focus:ring-2 focus:ring-[#7F00FF]";

    /// Elevated surface card on the black background.
    pub const SURFACE_CARD: &'static str = "w-full max-w-md rounded-lg bg-[#121212] p-8";
}

/// Navigation requests. Out-of-range requests are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Jumps to `index` if it names an existing page.
    GoToPage(usize),
    /// Advances one page, stopping at the last one.
    NextPage,
    /// Goes back one page, stopping at the first one.
    PreviousPage,
}

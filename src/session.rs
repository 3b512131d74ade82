//! Page flow for an interactive host: a landing page, then the detail view.

pub const TITLE: &str = "NBA Player Shot Chart";

pub const INTRODUCTION: &str = "This tool provides a visual representation of NBA player shot \
charts. By selecting a team and player, you can view where shots were made or missed on the \
basketball court.";

pub const INSTRUCTIONS: [&str; 3] = [
    "Select a team from the list of teams.",
    "After selecting a team, a list of players will be available. Select a player from this list.",
    "The shot chart for the selected player will be displayed. Missed shots are shown in red and made shots in green.",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Detail,
}

impl Page {
    /// The "Get Started" action. Detail has no way back.
    pub fn get_started(self) -> Page {
        Page::Detail
    }
}

pub fn landing_text() -> String {
    let mut text = format!("{TITLE}\n\n{INTRODUCTION}\n\nInstructions:\n");
    for (step, line) in INSTRUCTIONS.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", step + 1, line));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_start_on_landing() {
        assert_eq!(Page::default(), Page::Landing);
    }

    #[test]
    fn get_started_moves_to_detail_and_stays() {
        let page = Page::default().get_started();
        assert_eq!(page, Page::Detail);
        assert_eq!(page.get_started(), Page::Detail);
    }

    #[test]
    fn landing_text_numbers_instructions() {
        let text = landing_text();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("1. Select a team"));
        assert!(text.contains("3. The shot chart"));
    }
}

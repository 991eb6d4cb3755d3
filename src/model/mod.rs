mod card;
mod interaction;
mod skill;

pub use card::State;
pub use interaction::{
    AnswerGroup,
    CustomizationArg,
    CustomizationArgs,
    Hint,
    Interaction,
    Outcome,
    RuleSpec,
    Solution,
    SubtitledHtml,
};
pub use skill::Misconception;

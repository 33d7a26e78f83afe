//! Command parsing for the group and dataset prompts.
//!
//! Commands are case-insensitive and surrounding whitespace is ignored.

use crate::error::ValidationError;

/// A command entered while browsing a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCommand {
    /// Open the child at this zero-based index.
    Open(usize),
    /// Go to the parent group, or back to file selection from the root.
    Up,
    /// End the session.
    Exit,
}

/// A command entered while browsing a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetCommand {
    /// Go to the parent group.
    Up,
    /// Skip forward this many rows. Always positive.
    Next(usize),
    /// Show every row as one page.
    All,
    /// End the session.
    Exit,
}

const GROUP_HINT: &str = "Enter a number, 'q' or 'exit'.";
const DATASET_HINT: &str = "Enter 'q', 'n <count>', 'all' or 'exit'.";

/// Parse a group prompt answer. `child_count` bounds the 1-based choice.
pub fn parse_group_command(input: &str, child_count: usize) -> Result<GroupCommand, ValidationError> {
    let choice = input.trim().to_lowercase();
    match choice.as_str() {
        "q" => return Ok(GroupCommand::Up),
        "exit" => return Ok(GroupCommand::Exit),
        _ => {}
    }

    let number: i64 = choice
        .parse()
        .map_err(|_| ValidationError::Unrecognized(input.trim().to_string(), GROUP_HINT))?;

    if child_count == 0 {
        return Err(ValidationError::NothingToChoose);
    }
    match usize::try_from(number) {
        Ok(n) if (1..=child_count).contains(&n) => Ok(GroupCommand::Open(n - 1)),
        _ => Err(ValidationError::OutOfRange {
            choice: number,
            count: child_count,
        }),
    }
}

/// Parse a dataset prompt answer.
pub fn parse_dataset_command(input: &str) -> Result<DatasetCommand, ValidationError> {
    let choice = input.trim().to_lowercase();
    match choice.as_str() {
        "q" => Ok(DatasetCommand::Up),
        "all" => Ok(DatasetCommand::All),
        "exit" => Ok(DatasetCommand::Exit),
        "n" => Err(ValidationError::InvalidStep(choice.clone())),
        _ => match choice.strip_prefix("n ") {
            Some(count) => match count.trim().parse::<i64>() {
                Ok(k) if k > 0 => usize::try_from(k)
                    .map(DatasetCommand::Next)
                    .map_err(|_| ValidationError::InvalidStep(choice.clone())),
                _ => Err(ValidationError::InvalidStep(choice.clone())),
            },
            None => Err(ValidationError::Unrecognized(input.trim().to_string(), DATASET_HINT)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_choices_are_one_based() {
        assert_eq!(parse_group_command("1", 2), Ok(GroupCommand::Open(0)));
        assert_eq!(parse_group_command(" 2 ", 2), Ok(GroupCommand::Open(1)));
    }

    #[test]
    fn group_choices_out_of_range_are_rejected() {
        assert_eq!(
            parse_group_command("3", 2),
            Err(ValidationError::OutOfRange { choice: 3, count: 2 })
        );
        assert_eq!(
            parse_group_command("0", 2),
            Err(ValidationError::OutOfRange { choice: 0, count: 2 })
        );
        assert_eq!(
            parse_group_command("-1", 2),
            Err(ValidationError::OutOfRange { choice: -1, count: 2 })
        );
        assert_eq!(parse_group_command("1", 0), Err(ValidationError::NothingToChoose));
    }

    #[test]
    fn group_keywords_ignore_case() {
        assert_eq!(parse_group_command("Q", 1), Ok(GroupCommand::Up));
        assert_eq!(parse_group_command("EXIT", 1), Ok(GroupCommand::Exit));
        assert!(matches!(
            parse_group_command("xyz", 1),
            Err(ValidationError::Unrecognized(..))
        ));
    }

    #[test]
    fn dataset_step_must_be_positive() {
        assert_eq!(parse_dataset_command("n 10"), Ok(DatasetCommand::Next(10)));
        assert_eq!(parse_dataset_command("N   3"), Ok(DatasetCommand::Next(3)));
        for bad in ["n 0", "n -4", "n abc", "n", "n 1.5"] {
            assert!(
                matches!(parse_dataset_command(bad), Err(ValidationError::InvalidStep(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn dataset_keywords() {
        assert_eq!(parse_dataset_command("q"), Ok(DatasetCommand::Up));
        assert_eq!(parse_dataset_command("ALL"), Ok(DatasetCommand::All));
        assert_eq!(parse_dataset_command("exit"), Ok(DatasetCommand::Exit));
        assert!(matches!(
            parse_dataset_command("next"),
            Err(ValidationError::Unrecognized(..))
        ));
    }
}

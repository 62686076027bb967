use teloxide::types::InlineKeyboardButton;

/// One button per row, labeled and wired to callback data by the closures.
pub fn build_choice_buttons<T, F, G>(
    choices: &[T],
    label: F,
    callback: G,
) -> Vec<Vec<InlineKeyboardButton>>
where
    F: Fn(&T) -> String,
    G: Fn(&T) -> String,
{
    choices
        .iter()
        .map(|choice| vec![InlineKeyboardButton::callback(label(choice), callback(choice))])
        .collect()
}

use serenity::builder::{
    CreateActionRow, CreateButton, CreateInputText, CreateModal, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption,
};
use serenity::model::application::{ButtonStyle, InputTextStyle};

pub const PAUSE: &str = "player_pause";
pub const RESUME: &str = "player_resume";
pub const ADD_SONG: &str = "player_add_song";
pub const SKIP: &str = "player_skip";
pub const LOOP: &str = "player_loop";
pub const STOP: &str = "player_stop";
pub const VOLUME: &str = "player_volume";
pub const QUEUE_PLAY: &str = "custom_queue_play";
pub const QUEUE_ADD: &str = "custom_queue_add";

pub const ADD_SONG_MODAL: &str = "add_song_modal";
pub const SONG_INPUT: &str = "song_title";

/// What an add-song modal submission is for.
#[derive(Debug, PartialEq, Eq)]
pub enum ModalTarget<'a> {
    Player,
    CustomQueue(&'a str),
}

pub fn player_buttons(is_paused: bool, is_looping: bool) -> CreateActionRow {
    let pause_resume = if is_paused {
        CreateButton::new(RESUME)
            .label("Resume")
            .style(ButtonStyle::Success)
    } else {
        CreateButton::new(PAUSE)
            .label("Pause")
            .style(ButtonStyle::Danger)
    };

    let add = CreateButton::new(ADD_SONG)
        .label("Add Song")
        .style(ButtonStyle::Primary);

    let skip = CreateButton::new(SKIP)
        .label("Skip")
        .style(ButtonStyle::Primary);

    let looping = CreateButton::new(LOOP).label("Loop").style(if is_looping {
        ButtonStyle::Success
    } else {
        ButtonStyle::Danger
    });

    let stop = CreateButton::new(STOP)
        .label("Stop")
        .style(ButtonStyle::Danger);

    CreateActionRow::Buttons(vec![pause_resume, add, skip, looping, stop])
}

/// 10–100% in steps of 10, then 200–1000% in steps of 100.
pub fn volume_levels() -> Vec<u32> {
    (10..=100).step_by(10).chain((200..=1000).step_by(100)).collect()
}

fn volume_select() -> CreateActionRow {
    let options = volume_levels()
        .into_iter()
        .map(|level| CreateSelectMenuOption::new(format!("{level}%"), level.to_string()))
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(VOLUME, CreateSelectMenuKind::String { options })
            .placeholder("Select Volume"),
    )
}

/// Reads a volume select value. Accepts `"50"` and `"50%"`.
pub fn parse_volume(value: &str) -> Option<u32> {
    value.trim().trim_end_matches('%').parse().ok()
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{truncated}...")
    }
}

pub fn custom_queue_select(custom_id: &str, names: &[String]) -> CreateActionRow {
    let menu = if names.is_empty() {
        CreateSelectMenu::new(
            custom_id,
            CreateSelectMenuKind::String {
                options: vec![CreateSelectMenuOption::new("None", "none")],
            },
        )
        .placeholder("You have not yet set custom queues")
        .disabled(true)
    } else {
        let options = names
            .iter()
            .take(25)
            .map(|name| CreateSelectMenuOption::new(truncate_str(name, 100), name))
            .collect();
        CreateSelectMenu::new(custom_id, CreateSelectMenuKind::String { options })
            .placeholder("Select a custom Queue")
    };

    CreateActionRow::SelectMenu(menu)
}

pub fn player_components(
    is_paused: bool,
    is_looping: bool,
    queue_names: &[String],
) -> Vec<CreateActionRow> {
    vec![
        player_buttons(is_paused, is_looping),
        volume_select(),
        custom_queue_select(QUEUE_PLAY, queue_names),
    ]
}

pub fn add_song_modal(queue: Option<&str>) -> CreateModal {
    let custom_id = match queue {
        Some(name) => format!("{ADD_SONG_MODAL}:{name}"),
        None => ADD_SONG_MODAL.to_string(),
    };
    let input = CreateInputText::new(InputTextStyle::Short, "Song title", SONG_INPUT).required(true);
    CreateModal::new(custom_id, "Add a song").components(vec![CreateActionRow::InputText(input)])
}

pub fn modal_target(custom_id: &str) -> Option<ModalTarget<'_>> {
    let rest = custom_id.strip_prefix(ADD_SONG_MODAL)?;
    if rest.is_empty() {
        return Some(ModalTarget::Player);
    }
    rest.strip_prefix(':').map(ModalTarget::CustomQueue)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct CommandSpec {
    pub command: &'static str,
    pub action: &'static str,
}

/// Commands whose argument becomes an explicit dimension override. The
/// action names the override slot.
pub(crate) const OVERRIDE_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "mood",
        action: "mood",
    },
    CommandSpec {
        command: "lighting",
        action: "lighting",
    },
    CommandSpec {
        command: "composition",
        action: "composition",
    },
    CommandSpec {
        command: "scenario",
        action: "scenario",
    },
    CommandSpec {
        command: "scene",
        action: "scenario",
    },
    CommandSpec {
        command: "outfit",
        action: "outfit",
    },
    CommandSpec {
        command: "tone",
        action: "emotional_tone",
    },
];

pub(crate) const RAW_ARG_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "gender",
        action: "set_gender",
    },
    CommandSpec {
        command: "ethnicity",
        action: "set_ethnicity",
    },
    CommandSpec {
        command: "trigger",
        action: "set_trigger",
    },
];

/// Comma separated lists.
pub(crate) const LIST_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "style",
        action: "set_styles",
    },
    CommandSpec {
        command: "palette",
        action: "set_palette",
    },
];

/// Shell-quoted lists, so one entry may contain spaces.
pub(crate) const QUOTED_LIST_COMMANDS: &[CommandSpec] = &[CommandSpec {
    command: "features",
    action: "set_features",
}];

pub(crate) const NO_ARG_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "clear",
        action: "clear_overrides",
    },
    CommandSpec {
        command: "forget",
        action: "forget_history",
    },
    CommandSpec {
        command: "help",
        action: "help",
    },
    CommandSpec {
        command: "quit",
        action: "quit",
    },
    CommandSpec {
        command: "exit",
        action: "quit",
    },
];

pub(crate) const WEIGHT_COMMAND: CommandSpec = CommandSpec {
    command: "weight",
    action: "set_weight",
};

pub(crate) const CATALOG_COMMAND: CommandSpec = CommandSpec {
    command: "catalog",
    action: "catalog",
};

pub const CHAT_HELP_COMMANDS: &[&str] = &[
    "/mood <key>",
    "/lighting <key>",
    "/composition <key>",
    "/scenario <key>",
    "/outfit <key or text>",
    "/tone <energy>",
    "/clear",
    "/style <a, b>",
    "/palette <a, b>",
    "/features \"<a>\" \"<b>\"",
    "/gender <value>",
    "/ethnicity <value>",
    "/trigger <token>",
    "/weight <number>",
    "/catalog [dimension]",
    "/forget",
    "/help",
    "/quit",
];

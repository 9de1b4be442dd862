//! Output formatting for reminder listings.

use owo_colors::OwoColorize;

use remind_types::Reminder;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self { no_color }
    }
}

/// One listing row: status, short id, next occurrence, repeat, title.
pub fn format_row(reminder: &Reminder, opts: &FormatOptions) -> String {
    let status = if reminder.active { "on " } else { "off" };
    let status = if opts.no_color {
        status.to_string()
    } else if reminder.active {
        status.green().to_string()
    } else {
        status.dimmed().to_string()
    };

    let marker = if !reminder.important {
        String::new()
    } else if opts.no_color {
        "[!] ".to_string()
    } else {
        "[!] ".red().to_string()
    };

    format!(
        "{} {}  {}  {:<16} {}{}",
        status,
        reminder.short_id(),
        reminder.next_occurrence.format("%Y-%m-%d %H:%M"),
        reminder.repeat.to_string(),
        marker,
        reminder.title
    )
}

/// Full details of one reminder, multi-line.
pub fn format_detail(reminder: &Reminder) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id:          {}\n", reminder.id));
    out.push_str(&format!("Title:       {}\n", reminder.title));
    if !reminder.description.is_empty() {
        out.push_str(&format!("Description: {}\n", reminder.description));
    }
    out.push_str(&format!(
        "Next:        {}\n",
        reminder.next_occurrence.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!(
        "Time:        {}\n",
        reminder.trigger_time.format("%H:%M")
    ));
    out.push_str(&format!("Repeat:      {}\n", reminder.repeat));
    out.push_str(&format!(
        "Channel:     {}\n",
        if reminder.important {
            "popup + sound"
        } else {
            "toast"
        }
    ));
    if let Some(sound) = &reminder.sound {
        match reminder.sound_secs.filter(|s| *s > 0.0) {
            Some(secs) => out.push_str(&format!(
                "Sound:       {} (max {}s)\n",
                sound.display(),
                secs
            )),
            None => out.push_str(&format!("Sound:       {}\n", sound.display())),
        }
    }
    out.push_str(&format!(
        "Status:      {}\n",
        if reminder.active { "active" } else { "disabled" }
    ));
    out.push_str(&format!(
        "Created:     {}",
        reminder.created_at.format("%Y-%m-%d %H:%M")
    ));
    out
}

use std::net::SocketAddr;

use concat_string::concat_string;

const WIDTH: usize = 43;
const TITLE: &str = "Course Player is running!";

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_owned()
    } else {
        value.chars().take(width.saturating_sub(1)).chain(std::iter::once('…')).collect()
    }
}

fn line(content: &str) -> String {
    concat_string!("  ║", format!("{:<WIDTH$}", truncate(content, WIDTH)), "║")
}

fn url(address: SocketAddr) -> String {
    if address.ip().is_loopback() || address.ip().is_unspecified() {
        format!("http://localhost:{}", address.port())
    } else {
        format!("http://{address}")
    }
}

/// Startup message showing where the server listens and which folder it serves.
pub fn render(address: SocketAddr, root: &str) -> String {
    const FOLDER_LABEL: &str = "   Videos folder: ";
    let border = "═".repeat(WIDTH);

    [
        concat_string!("  ╔", border, "╗"),
        line(&format!("{TITLE:^WIDTH$}")),
        line(""),
        line(&concat_string!("   Open: ", url(address))),
        line(""),
        line(&concat_string!(
            FOLDER_LABEL,
            truncate(root, WIDTH - FOLDER_LABEL.chars().count())
        )),
        concat_string!("  ╚", border, "╝"),
    ]
    .join("\n")
}

use std::sync::Once;

use httpmock::MockServer;
use pastebin::{Pastebin, PastebinBuilder};

static TRACING_INIT: Once = Once::new();

pub const DEV_KEY: &str = "e2edevkey";
pub const SESSION_KEY: &str = "e2esessionkey0001";

/// Initializes the tracing subscriber for tests.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("TRACING").unwrap_or_else(|_| "info".to_string()))
            // Use with_test_writer to ensure logs are captured correctly by the test runner.
            .with_test_writer()
            .init();
    });
}

/// Builder pointed at the mock server.
pub fn builder_for(server: &MockServer) -> PastebinBuilder {
    init_tracing();
    let mut builder = Pastebin::builder();
    builder.dev_key(DEV_KEY).base_url(server.base_url());
    builder
}

pub fn pastebin_for(server: &MockServer) -> Pastebin {
    builder_for(server).build().unwrap()
}

/// One `<paste>` fragment as the listing endpoints return it.
pub fn paste_xml(server: &MockServer, key: &str, private: u8) -> String {
    format!(
        "<paste>\r\n\
         \t<paste_key>{key}</paste_key>\r\n\
         \t<paste_date>1338506914</paste_date>\r\n\
         \t<paste_title>{key} title</paste_title>\r\n\
         \t<paste_size>11</paste_size>\r\n\
         \t<paste_expire_date>1338593314</paste_expire_date>\r\n\
         \t<paste_private>{private}</paste_private>\r\n\
         \t<paste_format_long>Rust</paste_format_long>\r\n\
         \t<paste_format_short>rust</paste_format_short>\r\n\
         \t<paste_url>{url}</paste_url>\r\n\
         \t<paste_hits>42</paste_hits>\r\n\
         </paste>\r\n",
        url = server.url(format!("/{key}")),
    )
}

pub fn user_xml(account_type: &str) -> String {
    format!(
        "<user>\r\n\
         \t<user_name>wiz_kitty</user_name>\r\n\
         \t<user_format_short>rust</user_format_short>\r\n\
         \t<user_expiration>1D</user_expiration>\r\n\
         \t<user_avatar_url>https://pastebin.com/cache/a/1.jpg</user_avatar_url>\r\n\
         \t<user_private>1</user_private>\r\n\
         \t<user_website>https://example.com</user_website>\r\n\
         \t<user_email>kitty@example.com</user_email>\r\n\
         \t<user_location>New York</user_location>\r\n\
         \t<user_account_type>{account_type}</user_account_type>\r\n\
         </user>"
    )
}

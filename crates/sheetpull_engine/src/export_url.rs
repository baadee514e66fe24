/// Rewrites a spreadsheet share URL (`.../edit?gid=<id>#gid=<id>`) into the
/// CSV export endpoint (`.../export?format=csv&gid=<id>`), keeping the sheet
/// identifier intact.
///
/// The substitution is deliberately permissive: a URL without the markers
/// passes through unchanged and the subsequent fetch fails on its own.
pub fn csv_export_url(share_url: &str) -> String {
    share_url
        .replace("/edit?gid=", "/export?format=csv&gid=")
        .replace("#gid=", "&gid=")
}

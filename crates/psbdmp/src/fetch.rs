use std::path::Path;

use psbdmp_core::dump::Dump;

use crate::client::DumpClient;
use crate::prelude::{eprintln, *};

/// Download the content of every dump and write each to `<outdir>/<id>`.
///
/// Records are fetched sequentially in the order the search returned them.
/// One record failing to fetch or write does not abort the rest: the failure
/// is reported with the offending id and the loop moves on. Returns the
/// number of files written.
pub async fn fetch_all(client: &DumpClient, dumps: &[Dump], outdir: &Path) -> Result<usize> {
    std::fs::create_dir_all(outdir)
        .wrap_err_with(|| format!("cannot create output directory {}", outdir.display()))?;

    let mut written = 0;
    for dump in dumps {
        if !is_safe_file_name(&dump.id) {
            eprintln!("[!] {}: id is not a safe file name, skipping", dump.id);
            continue;
        }

        let content = match client.get_dump_content(&dump.id).await {
            Ok(content) => content,
            Err(err) => {
                eprintln!("[!] {}: {err}", dump.id);
                continue;
            }
        };

        let path = outdir.join(&dump.id);
        match std::fs::write(&path, content) {
            Ok(()) => written += 1,
            Err(err) => eprintln!("[!] {}: {err}", dump.id),
        }
    }

    Ok(written)
}

/// Ids come from the remote search response, so they cannot be trusted to
/// stay inside the output directory when joined onto it. Anything that is
/// not a plain single-component file name is refused.
fn is_safe_file_name(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

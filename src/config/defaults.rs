const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 600;
const MIN_RESPONSE_BYTES: usize = 1024;
const MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;

pub(super) fn base_url() -> String {
    "https://functions.poehali.dev".to_string()
}

pub(super) fn lines_path() -> String {
    "/87cb021e-3df1-4f71-b0d8-4df60822b25e".to_string()
}

pub(super) fn text_path() -> String {
    "/api/analyze-sentiment".to_string()
}

pub(super) fn connect_timeout_secs() -> u64 {
    10
}

pub(super) fn read_timeout_secs() -> u64 {
    30
}

pub(super) fn max_response_bytes() -> usize {
    4 * 1024 * 1024
}

pub(super) fn clamp_timeout_secs(value: u64) -> u64 {
    value.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
}

pub(super) fn clamp_max_response_bytes(value: usize) -> usize {
    value.clamp(MIN_RESPONSE_BYTES, MAX_RESPONSE_BYTES)
}

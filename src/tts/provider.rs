/// A source of encoded speech audio for a phrase.
///
/// Implementations return the raw encoded bytes (whatever container the
/// service produces); the synthesis adapter owns turning those bytes into
/// the final MP3 asset.
pub trait TtsBackend: Send + Sync {
    fn name(&self) -> &str;
    fn fetch(&self, text: &str) -> anyhow::Result<Vec<u8>>;
}

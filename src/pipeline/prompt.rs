//! Prompt builders for the three generation stages.
//!
//! The dialog instruction and the JSON shapes requested from the model are
//! fixed contract text; only the embedded data varies.

/// Stage 1: generate a short Vietnamese dialog (no structured-output hint).
pub const DIALOG_PROMPT: &str = "Tạo một hội thoại bằng tiếng Việt, gồm 6 câu, ngắn gọn, \
đơn giản, hỏi đường đi đến hồ Hoàn Kiếm ở Hà Nội giữa một người Mỹ tên James và người \
Việt Nam tên Lan. Chỉ xuất ra hội thoại không cần giải thích.";

/// Stage 2: extract the important words of a dialog as `{"words": [...]}`.
pub fn build_words_prompt(dialog: &str) -> String {
    format!(
        "Từ hội thoại sau, hãy lọc ra danh sách các từ và cụm từ quan trọng, bỏ qua danh từ \
tên riêng (như James, Lan, Hà Nội, Hoàn Kiếm). Trả về kết quả dưới dạng JSON với cấu trúc \
{{\"words\": [\"word1\", \"word2\", ...]}}.\n{dialog}"
    )
}

/// Stage 3: translate a word list as `{"translated_words": [{"vi", "en"}, ...]}`.
pub fn build_translate_prompt(words: &[String]) -> String {
    let items: Vec<String> = words
        .iter()
        .map(|w| serde_json::json!({ "vi": w }).to_string())
        .collect();

    format!(
        "Dịch từng từ hoặc cụm từ trong danh sách dưới sang tiếng Anh, trả về JSON với cấu \
trúc {{\"translated_words\": [{{\"vi\": \"word\", \"en\": \"translation\"}}, ...]}}.\n[{}]",
        items.join(",")
    )
}

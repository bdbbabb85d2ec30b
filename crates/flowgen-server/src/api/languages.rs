use axum::Json;
use flowgen_core::{Language, LanguageInfo};

// GET /languages
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.into_iter().map(LanguageInfo::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_languages() {
        let languages = list_languages().await.0;

        let ids: Vec<&str> = languages.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["curl", "python", "js", "ts"]);
        assert_eq!(languages[0].name, "cURL");
        assert_eq!(languages[3].syntax, "typescript");
    }
}

use std::rc::Rc;
use serde::{ Deserialize, Serialize };
use crate::persist::{ KeyValueStorage, PersistPaths, PersistedStore };

pub const WEB_INFO_STORE_ID: &str = "webInfo";

/// Fields of [`WebInfoState`] written to storage. Anything else added to the
/// state lives only for the session.
pub const WEB_INFO_PERSISTED_FIELDS: PersistPaths = PersistPaths::Only(&["webInfo", "users"]);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            github: "https://github.com/kaleab".to_string(),
            linkedin: "https://linkedin.com/in/kaleab".to_string(),
            twitter: "https://twitter.com/kaleab".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebInfo {
    pub name: String,
    pub url: String,
    pub email: String,
    pub social_links: SocialLinks,
}

impl Default for WebInfo {
    fn default() -> Self {
        Self {
            name: "Kaleab Abebe - Portfolio".to_string(),
            url: "https://kaleab-portfolio.com".to_string(),
            email: "contact@kaleab-portfolio.com".to_string(),
            social_links: SocialLinks::default(),
        }
    }
}

/// A partial [`WebInfo`]; `None` fields are left untouched by a merge.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebInfoPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub social_links: Option<SocialLinks>,
}

impl WebInfoPatch {
    pub fn email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()), ..Self::default() }
    }
}

impl WebInfo {
    /// Shallow merge: every top-level field present in `patch` replaces the
    /// current one. `social_links` is one field, so a patch carrying it
    /// replaces all three links at once. Links not restated are lost.
    pub fn merge(&mut self, patch: WebInfoPatch) {
        let WebInfoPatch { name, url, email, social_links } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(social_links) = social_links {
            self.social_links = social_links;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebInfoState {
    pub web_info: WebInfo,
    pub users: u64,
}

/// Site metadata and the visit counter, persisted under `webInfo`.
pub struct WebInfoStore {
    inner: PersistedStore<WebInfoState>,
}

impl WebInfoStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: PersistedStore::new(WEB_INFO_STORE_ID, storage, WEB_INFO_PERSISTED_FIELDS),
        }
    }

    pub fn state(&self) -> &WebInfoState {
        self.inner.state()
    }

    pub fn web_info(&self) -> &WebInfo {
        &self.state().web_info
    }

    pub fn users(&self) -> u64 {
        self.state().users
    }

    pub fn update_web_info(&mut self, new_info: WebInfoPatch) {
        self.inner.update(|state| state.web_info.merge(new_info));
        log::debug!("Site info updated");
    }

    /// Count one visit. The counter saturates at `u64::MAX`.
    pub fn users_add(&mut self) {
        let users = self.inner.update(|state| {
            match state.users.checked_add(1) {
                Some(next) => state.users = next,
                None => log::warn!("Visit counter is saturated at {}", state.users),
            }
            state.users
        });
        log::debug!("Visit counted, total: {}", users);
    }

    pub fn users_reset(&mut self) {
        self.inner.update(|state| state.users = 0);
        log::debug!("Visit counter reset");
    }
}

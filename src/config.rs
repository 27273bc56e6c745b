//! Driver configuration, read once from the environment at startup.

use std::env;
use std::ffi::OsString;

/// The four hosting platforms the subject tool is exercised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    GitHub,
    AzureDevOps,
    GitLab,
    Bitbucket,
}

impl Platform {
    /// Declaration order, which is also the order scenarios run in.
    pub const ALL: [Platform; 4] = [
        Platform::GitHub,
        Platform::AzureDevOps,
        Platform::GitLab,
        Platform::Bitbucket,
    ];

    /// Value passed to the subject tool's `--devops` flag.
    pub fn devops_name(self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::AzureDevOps => "AzureDevOps",
            Platform::GitLab => "GitLab",
            Platform::Bitbucket => "Bitbucket",
        }
    }

    fn env_prefix(self) -> &'static str {
        match self {
            Platform::GitHub => "GO_CLOC_GITHUB",
            Platform::AzureDevOps => "GO_CLOC_AZURE_DEVOPS",
            Platform::GitLab => "GO_CLOC_GITLAB",
            Platform::Bitbucket => "GO_CLOC_BITBUCKET",
        }
    }

    pub fn organization_var(self) -> String {
        format!("{}_ORGANIZATION", self.env_prefix())
    }

    pub fn access_token_var(self) -> String {
        format!("{}_ACCESS_TOKEN", self.env_prefix())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformCredentials {
    pub organization: OsString,
    pub access_token: OsString,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub github: PlatformCredentials,
    pub azure_devops: PlatformCredentials,
    pub gitlab: PlatformCredentials,
    pub bitbucket: PlatformCredentials,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Values are kept as raw OS strings. Unset variables become empty; the
    /// subject tool is left to reject them.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let read = |platform: Platform| PlatformCredentials {
            organization: lookup(&platform.organization_var()).unwrap_or_default(),
            access_token: lookup(&platform.access_token_var()).unwrap_or_default(),
        };
        Config {
            github: read(Platform::GitHub),
            azure_devops: read(Platform::AzureDevOps),
            gitlab: read(Platform::GitLab),
            bitbucket: read(Platform::Bitbucket),
        }
    }

    pub fn credentials(&self, platform: Platform) -> &PlatformCredentials {
        match platform {
            Platform::GitHub => &self.github,
            Platform::AzureDevOps => &self.azure_devops,
            Platform::GitLab => &self.gitlab,
            Platform::Bitbucket => &self.bitbucket,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ShopManager,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    ApiKey { name: String, role: Role },
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Identity::Anonymous)
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Identity::Anonymous => None,
            Identity::ApiKey { role, .. } => Some(*role),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::Anonymous => "anonymous",
            Identity::ApiKey { name, .. } => name,
        }
    }
}

/// The kind of an executable operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword used for this kind of operation in GraphQL syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The capitalized keyword, as used in generated operation names (e.g.
    /// `MyMutation`).
    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutation" => Ok(Self::Mutation),
            "query" => Ok(Self::Query),
            "subscription" => Ok(Self::Subscription),
            other => Err(format!(
                "`{other}` is not an operation kind (expected one of \
                `query`, `mutation`, `subscription`)",
            )),
        }
    }
}

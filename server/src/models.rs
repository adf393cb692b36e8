use crate::context::GraphqlContext;
use juniper::ID;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
}

impl User {
    pub fn new(id: &str, email: &str, name: &str, created_at: &str) -> Self {
        Self {
            id: id.to_owned(),
            email: email.to_owned(),
            name: name.to_owned(),
            created_at: created_at.to_owned(),
        }
    }
}

#[juniper::graphql_object(context = GraphqlContext)]
impl User {
    fn id(&self) -> ID {
        ID::new(&self.id)
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// RFC 3339 creation timestamp.
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Fields accepted by the `createUser` mutation.
#[derive(Clone, Debug, juniper::GraphQLInputObject)]
#[graphql(name = "CreateUserInput")]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

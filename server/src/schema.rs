use crate::{
    context::GraphqlContext,
    models::{NewUser, User},
};
use juniper::{EmptySubscription, RootNode, ID};

#[derive(Debug)]
pub struct Query;

#[juniper::graphql_object(context = GraphqlContext)]
impl Query {
    /// Looks a user up by id. Unknown ids resolve to `null`, not to an error.
    fn get_user(ctx: &GraphqlContext, id: ID) -> Option<User> {
        let user = ctx.database().find_by_id(&id);
        if user.is_none() {
            log::debug!("getUser: no user with id {}", &*id);
        }
        user
    }
}

#[derive(Debug)]
pub struct Mutation;

#[juniper::graphql_object(context = GraphqlContext)]
impl Mutation {
    fn create_user(ctx: &GraphqlContext, input: NewUser) -> User {
        let user = ctx.database().insert(input);
        log::info!("createUser: created user {}", user.id);
        user
    }
}

pub type GraphqlRoot = RootNode<'static, Query, Mutation, EmptySubscription<GraphqlContext>>;

pub fn init() -> GraphqlRoot {
    GraphqlRoot::new(Query, Mutation, EmptySubscription::new())
}

//! GraphQL schema: thin query and mutation roots over the todo store.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ID, Object, Result, Schema, SchemaBuilder, SimpleObject,
};
use tokio::sync::Mutex;
use todo_store::store::TodoStore;
use todo_store::todo::Todo;

/// The store as held in schema context data. One lock guards each store
/// operation, including its file write.
pub type SharedStore = Arc<Mutex<TodoStore>>;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Schema without any context data; enough to export the SDL.
pub fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

/// Build the executable schema around an owned store.
pub fn build_schema(store: TodoStore) -> TodoSchema {
    let store: SharedStore = Arc::new(Mutex::new(store));
    schema_builder().data(store).finish()
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Todo")]
pub struct TodoObject {
    pub id: ID,
    pub text: String,
    pub completed: bool,
}

impl From<Todo> for TodoObject {
    fn from(todo: Todo) -> Self {
        Self {
            id: ID(todo.id),
            text: todo.text,
            completed: todo.completed,
        }
    }
}

fn shared_store<'a>(ctx: &Context<'a>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every todo, in insertion order.
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<Option<TodoObject>>> {
        let store = shared_store(ctx)?.lock().await;
        Ok(store
            .list()
            .iter()
            .cloned()
            .map(|todo| Some(todo.into()))
            .collect())
    }

    /// The first todo with the given id, or null.
    async fn todo(&self, ctx: &Context<'_>, id: ID) -> Result<Option<TodoObject>> {
        let store = shared_store(ctx)?.lock().await;
        Ok(store.get(&id).cloned().map(TodoObject::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Append a new, not completed todo.
    async fn add_todo(&self, ctx: &Context<'_>, text: String) -> Result<TodoObject> {
        let mut store = shared_store(ctx)?.lock().await;
        Ok(store.add(text)?.into())
    }

    /// Replace the text of an existing todo.
    async fn edit_todo(&self, ctx: &Context<'_>, id: ID, text: String) -> Result<TodoObject> {
        let mut store = shared_store(ctx)?.lock().await;
        Ok(store.edit(&id, text)?.into())
    }

    /// Remove a todo, returning it as it was before removal.
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> Result<TodoObject> {
        let mut store = shared_store(ctx)?.lock().await;
        Ok(store.delete(&id)?.into())
    }
}

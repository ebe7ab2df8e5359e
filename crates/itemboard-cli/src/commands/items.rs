use anyhow::anyhow;
use itemboard_api_models::{
    Item, ItemCreateRequest, ItemListResponse, ItemUpdateRequest, ListParams,
};

use crate::cli::{ItemAddArgs, ItemListArgs, ItemRemoveArgs, ItemRenameArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult, classify_problem};
use crate::output::{render_item, render_item_list};

const ITEMS_PATH: &str = "/api/items";

/// Combine a UI address (if any) with explicit flags; flags win.
pub(crate) fn resolve_list_params(args: &ItemListArgs) -> CliResult<ListParams> {
    let mut params = args
        .view
        .as_ref()
        .map(|view| ListParams::from_pairs(view.query_pairs()))
        .unwrap_or_default();
    if let Some(query) = &args.query {
        params.query.clone_from(query);
    }
    if let Some(sort) = args.sort {
        params.sort = sort;
    }
    if let Some(order) = args.order {
        params.order = order;
    }
    if let Some(page) = args.page {
        if page == 0 {
            return Err(CliError::validation("page must be at least 1"));
        }
        params.page = page;
    }
    if let Some(limit) = args.limit {
        if limit == 0 {
            return Err(CliError::validation("limit must be at least 1"));
        }
        params.limit = limit;
    }
    Ok(params)
}

fn validated_name(raw: &str) -> CliResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CliError::validation("name is required"));
    }
    Ok(name)
}

pub(crate) async fn handle_item_list(
    ctx: &AppContext,
    args: ItemListArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let params = resolve_list_params(&args)?;
    let mut url = ctx.endpoint(ITEMS_PATH);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params.to_query().pairs() {
            pairs.append_pair(key, &value);
        }
    }
    tracing::debug!(%url, "listing items");

    let response = ctx
        .client
        .get(url)
        .send()
        .await
        .map_err(|err| CliError::failure(anyhow!("request to {ITEMS_PATH} failed: {err}")))?;

    if response.status().is_success() {
        let list = response
            .json::<ItemListResponse>()
            .await
            .map_err(|err| CliError::failure(anyhow!("failed to parse item list: {err}")))?;
        if !list.is_consistent() {
            tracing::warn!(
                page = list.page,
                pages = list.pages,
                count = list.items.len(),
                "server returned an inconsistent page"
            );
        }
        render_item_list(&list, output)
    } else {
        Err(classify_problem(response).await)
    }
}

pub(crate) async fn handle_item_add(
    ctx: &AppContext,
    args: ItemAddArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let name = validated_name(&args.name)?;
    let url = ctx.endpoint(ITEMS_PATH);
    tracing::debug!(name, "creating item");

    let response = ctx
        .client
        .post(url)
        .json(&ItemCreateRequest {
            name: name.to_string(),
        })
        .send()
        .await
        .map_err(|err| CliError::failure(anyhow!("request to {ITEMS_PATH} failed: {err}")))?;

    if response.status().is_success() {
        let item = response
            .json::<Item>()
            .await
            .map_err(|err| CliError::failure(anyhow!("failed to parse created item: {err}")))?;
        render_item(&item, output)
    } else {
        Err(classify_problem(response).await)
    }
}

pub(crate) async fn handle_item_rename(
    ctx: &AppContext,
    args: ItemRenameArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let name = validated_name(&args.name)?;
    let id = args.id;
    let path = format!("{ITEMS_PATH}/{id}");
    let url = ctx.endpoint(&path);
    tracing::debug!(id, name, "renaming item");

    let response = ctx
        .client
        .put(url)
        .json(&ItemUpdateRequest {
            name: name.to_string(),
        })
        .send()
        .await
        .map_err(|err| CliError::failure(anyhow!("request to {path} failed: {err}")))?;

    if response.status().is_success() {
        let item = response
            .json::<Item>()
            .await
            .map_err(|err| CliError::failure(anyhow!("failed to parse updated item: {err}")))?;
        render_item(&item, output)
    } else {
        Err(classify_problem(response).await)
    }
}

pub(crate) async fn handle_item_remove(ctx: &AppContext, args: ItemRemoveArgs) -> CliResult<()> {
    let id = args.id;
    let path = format!("{ITEMS_PATH}/{id}");
    let url = ctx.endpoint(&path);
    tracing::debug!(id, "deleting item");

    let response = ctx
        .client
        .delete(url)
        .send()
        .await
        .map_err(|err| CliError::failure(anyhow!("request to {path} failed: {err}")))?;

    if response.status().is_success() {
        println!("Removed item {id}");
        Ok(())
    } else {
        Err(classify_problem(response).await)
    }
}

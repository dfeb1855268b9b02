// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ignite_feed::{Author, CommentRecord, ContentLine, Feed, PostData, PublishedTime};
use kobold::prelude::*;
use log::{error, info};
use web_sys::{HtmlFormElement, HtmlTextAreaElement};

mod state;

use state::PostState;

#[component]
fn brand_header() -> impl View {
    view! {
        <header .header>
            <img src="ignite-logo.svg" alt="Logotipo do Ignite" />
        </header>
    }
}

#[component(has_border?: true)]
fn avatar<'a>(src: &'a str, has_border: bool) -> impl View + 'a {
    let class = if has_border { "avatar with-border" } else { "avatar" };

    view! { <img {class} {src} alt="" /> }
}

#[component]
fn feed_page(feed: Feed) -> impl View {
    let Feed { viewer, posts } = feed;

    view! {
        <!brand_header>
        <div .wrapper>
            <main>
            {
                for posts.into_iter().map(move |post| view! {
                    <!post_view {post} viewer={viewer.clone()}>
                })
            }
            </main>
        </div>
    }
}

#[component]
fn post_view(post: PostData, viewer: Author) -> impl View {
    stateful(move || PostState::new(post, viewer), |state| {
        bind! {
            state:

            let oninput = move |e: Event<HtmlTextAreaElement>| state.thread.update_draft(&e.target().value());
            let onsubmit = move |e: Event<HtmlFormElement>| {
                // The page must not reload on submit
                e.prevent_default();
                state.publish();
            };
        }

        let author = &state.post.author;
        let published = &state.published;

        view! {
            <article .post>
                <header>
                    <div .author>
                        <!avatar src={author.avatar_url.as_str()}>
                        <div .author-info>
                            <strong>{ ref author.name }</strong>
                            <span>{ ref author.role }</span>
                        </div>
                    </div>
                    <time title={published.title.as_str()} datetime={published.datetime.as_str()}>
                        { published.relative.as_str() }
                    </time>
                </header>
                <div .content>
                {
                    for state.post.content.iter().map(|line| view! { <!content_line {line}> })
                }
                </div>
                <form .comment-form {onsubmit}>
                    <strong>"Deixe seu feedback"</strong>
                    <textarea
                        name="comment"
                        placeholder="Deixe um comentário"
                        value={state.thread.draft()}
                        {oninput}
                    />
                    <footer>
                        <!publish_button enabled={!state.thread.is_draft_empty()}>
                    </footer>
                </form>
                <div .comment-list>
                {
                    for state.comments().map(move |(comment, time)| view! {
                        <!comment_view {comment} {time} {state}>
                    })
                }
                </div>
            </article>
        }
    })
}

#[component(auto_branch)]
fn content_line(line: &ContentLine) -> impl View + '_ {
    if line.is_link() {
        view! { <p><a href={line.href()}>{ ref line.content }</a></p> }
    } else {
        view! { <p>{ ref line.content }</p> }
    }
}

#[component(auto_branch)]
fn publish_button(enabled: bool) -> impl View {
    if enabled {
        view! { <button type="submit">"Publicar"</button> }
    } else {
        view! { <button type="submit" disabled="disabled">"Publicar"</button> }
    }
}

#[component]
fn comment_view<'a>(
    comment: &'a CommentRecord,
    time: &'a PublishedTime,
    state: &'a Hook<PostState>,
) -> impl View + 'a {
    let id = comment.id;

    bind! {
        state:

        let ondelete = move |_| state.delete(id);
        let onlike = move |_| state.like(id);
    }

    view! {
        <div .comment>
            <!avatar src={comment.author.avatar_url.as_str()} has_border={false}>
            <div .comment-box>
                <div .comment-content>
                    <header>
                        <div .author-and-time>
                            <strong>{ comment.author.name.as_str() }</strong>
                            <time title={time.title.as_str()} datetime={time.datetime.as_str()}>
                                { time.relative.as_str() }
                            </time>
                        </div>
                        <button title="Deletar comentário" onclick={ondelete}>"🗑"</button>
                    </header>
                    <p>{ comment.text.as_str() }</p>
                </div>
                <footer>
                    <button onclick={onlike}>
                        "👍 Aplaudir "<span>{ comment.likes.count() }</span>
                    </button>
                </footer>
            </div>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    match Feed::builtin() {
        Ok(feed) => {
            info!("rendering {} post(s) for {}", feed.posts.len(), feed.viewer.name);

            kobold::start(view! { <!feed_page {feed}> });
        }
        Err(err) => {
            error!("{err}");

            kobold::start(view! {
                <p .error>"Não foi possível carregar o feed: "{ err.to_string() }</p>
            });
        }
    }
}

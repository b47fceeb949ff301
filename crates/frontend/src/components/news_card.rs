//! News article card component.

use floramed_core::NewsArticle;
use yew::prelude::*;

use crate::components::Card;

/// Properties for NewsCard component.
#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub article: NewsArticle,
    /// Used when the article has no image of its own.
    pub default_image: AttrValue,
}

/// One article in the news grid.
#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let article = &props.article;
    let image = article.image_or(&props.default_image).to_string();

    html! {
        <Card
            image={image}
            title={article.title().to_string()}
            description={article.description().to_string()}
        >
            <a
                href={article.link.clone()}
                target="_blank"
                rel="noreferrer"
                class="read-more"
            >
                {"Read full article →"}
            </a>
        </Card>
    }
}

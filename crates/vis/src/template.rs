use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;

const PAGE_TEMPLATE: &str = "page";

pub(crate) struct TemplateEngine<'a> {
    template: TinyTemplate<'a>,
}

impl TemplateEngine<'static> {
    pub fn new() -> Result<TemplateEngine<'static>> {
        let mut template = TinyTemplate::new();
        template.add_template(PAGE_TEMPLATE, include_str!("./template/page.html.tt"))?;

        Ok(Self { template })
    }
}

impl TemplateEngine<'_> {
    pub fn render<C: Serialize>(&self, context: &C) -> Result<String> {
        let text = self.template.render(PAGE_TEMPLATE, context)?;
        Ok(text)
    }
}

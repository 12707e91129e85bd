use crate::areas::toolbox::Toolbox;
use crate::artifacts::codegen::java_bean::generate_java_bean;

#[derive(Debug, Clone)]
pub struct JavaBeanOptions {
    pub text: Option<String>,
    pub class_name: String,
}

impl Toolbox {
    pub fn java_bean(&self, opts: &JavaBeanOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        let source = generate_java_bean(&input, &opts.class_name)?;
        tracing::debug!(class_name = %opts.class_name, lines = source.lines().count(), "generated java bean");

        self.emit(&source)
    }
}

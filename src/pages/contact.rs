//! Hand-authored contact page fragments, inserted verbatim

pub(super) const CONTACT_TH: &str = r#"<div class="contact-page">
	<h1>Contact &amp; About Me</h1>

	<section class="about-section">
		<h2>About Me</h2>
		<p>ธีรภัทร ยาใจ</p>
		<p>website นี้จัดทำขึ้นเพื่อการศึกษาและแบ่งปันความรู้เท่านั้น หากมีข้อผิดพลาดหรือต้องการให้เพิ่มเติมอะไร สามารถติดต่อตามที่ติดต่อข้างล่างได้เลย ขอบคุณที่เข้ามาอ่านกันนะครับ 🥰</p>
	</section>

	<section class="contact-section">
		<h2>Contact Me</h2>
		<ul class="contact-list">
			<li>Email: <a href="mailto:teerapat.yj@gmail.com">teerapat.yj@gmail.com</a></li>
			<li>GitHub: <a href="https://github.com/kenn-teera" target="_blank" rel="noopener noreferrer">github.com/kenn-teera</a></li>
			<li>LinkedIn: <a href="https://linkedin.com/in/teerapat-yajai/" target="_blank" rel="noopener noreferrer">linkedin.com/in/teerapat-yajai</a></li>
		</ul>
	</section>
</div>"#;

pub(super) const CONTACT_EN: &str = r#"<div class="contact-page">
	<h1>Contact &amp; About Me</h1>

	<section class="about-section">
		<h2>About Me</h2>
		<p>Teerapat Yajai</p>
		<p>This website is built for learning and sharing knowledge. If there are any errors or you want to add more, you can contact me through the contact information below. Thank you for reading! 🥰</p>
	</section>

	<section class="contact-section">
		<h2>Contact Me</h2>
		<ul class="contact-list">
			<li>Email: <a href="mailto:teerapat.yj@gmail.com">teerapat.yj@gmail.com</a></li>
			<li>GitHub: <a href="https://github.com/kenn-teera" target="_blank" rel="noopener noreferrer">github.com/kenn-teera</a></li>
			<li>LinkedIn: <a href="https://linkedin.com/in/teerapat-yajai" target="_blank" rel="noopener noreferrer">linkedin.com/in/teerapat-yajai</a></li>
		</ul>
	</section>
</div>"#;
